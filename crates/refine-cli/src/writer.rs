use std::path::{Path, PathBuf};

/// Resolve where the refined CSV lands: an explicit `--output` wins,
/// otherwise `<input stem>_refined.csv` next to the input.
pub fn resolve_output_path(input: &Path, output: Option<&str>) -> PathBuf {
    match output {
        Some(path) => PathBuf::from(path),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "refined".to_string());
            input.with_file_name(format!("{}_refined.csv", stem))
        }
    }
}
