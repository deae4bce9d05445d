/// Outcome of one check application: the violating record identifiers, in
/// dataset order. An empty list means every value matched.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub column: String,
    pub rule_name: String,
    pub violations: Vec<String>,
}

impl RuleOutcome {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Accumulated findings of a refinement run, in application order.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    initial_rows: usize,
    outcomes: Vec<RuleOutcome>,
    duplicates_removed: Option<usize>,
}

impl ValidationReport {
    pub fn new(initial_rows: usize) -> Self {
        Self {
            initial_rows,
            outcomes: Vec::new(),
            duplicates_removed: None,
        }
    }

    pub fn record_outcome(&mut self, outcome: RuleOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn record_duplicates(&mut self, removed: usize) {
        self.duplicates_removed = Some(removed);
    }

    pub fn initial_rows(&self) -> usize {
        self.initial_rows
    }

    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Duplicate rows removed by the final deduplication pass, if it ran.
    pub fn duplicates_removed(&self) -> Option<usize> {
        self.duplicates_removed
    }

    /// Total rows removed, violations and duplicates together.
    pub fn rows_removed(&self) -> usize {
        let violations: usize = self.outcomes.iter().map(|o| o.violations.len()).sum();
        violations + self.duplicates_removed.unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.rows_removed() == 0
    }
}
