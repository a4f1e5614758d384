use crate::ir::SourceDecls;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Load statistics for the files of one package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserMetrics {
    pub files_attempted: usize,
    pub files_succeeded: usize,
    pub files_failed: usize,

    /// Wall time spent reading and parsing, in milliseconds on the wire
    #[serde(with = "millis")]
    pub total_parse_time: Duration,

    /// `type` specs seen, exported or not
    pub total_type_specs: usize,

    /// Function and method declarations seen, exported or not
    pub total_func_decls: usize,
}

mod millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

impl ParserMetrics {
    /// Account for one file; `decls` is `None` when loading it failed.
    pub fn record_file(&mut self, decls: Option<&SourceDecls>, elapsed: Duration) {
        self.files_attempted += 1;
        match decls {
            Some(decls) => {
                self.files_succeeded += 1;
                self.total_type_specs += decls.type_specs.len();
                self.total_func_decls += decls.func_decls.len();
            }
            None => self.files_failed += 1,
        }
        self.total_parse_time += elapsed;
    }

    /// Fraction of attempted files that loaded, 0.0 when nothing was attempted
    pub fn success_rate(&self) -> f64 {
        if self.files_attempted == 0 {
            return 0.0;
        }
        self.files_succeeded as f64 / self.files_attempted as f64
    }

    pub fn avg_parse_time(&self) -> Duration {
        match u32::try_from(self.files_succeeded) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_parse_time / n,
        }
    }

    pub fn merge(&mut self, other: &ParserMetrics) {
        self.files_attempted += other.files_attempted;
        self.files_succeeded += other.files_succeeded;
        self.files_failed += other.files_failed;
        self.total_parse_time += other.total_parse_time;
        self.total_type_specs += other.total_type_specs;
        self.total_func_decls += other.total_func_decls;
    }
}

impl fmt::Display for ParserMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} files, {} type specs, {} func decls in {:?} ({:?} per file)",
            self.files_succeeded,
            self.files_attempted,
            self.total_type_specs,
            self.total_func_decls,
            self.total_parse_time,
            self.avg_parse_time()
        )
    }
}
