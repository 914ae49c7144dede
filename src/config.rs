//! JSON configuration loading shared by the service and the command line.

use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Internal(format!(
            "Failed to open config file {}: {}",
            path.display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader).map_err(|e| {
        Error::Internal(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Internal(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportConfig;
    use serde::Serialize;
    use std::{io::Write, time::Duration};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Timed {
        #[serde(with = "duration_secs")]
        timeout: Duration,
    }

    #[test]
    fn test_from_str_uses_defaults() {
        let config: ReportConfig = from_str("{}").unwrap();
        assert_eq!(config.value_width, 19);
        assert!(config.include_unknown);
    }

    #[test]
    fn test_from_str_invalid_json() {
        let result: InternalResult<ReportConfig> = from_str("{ not json");
        assert!(matches!(result, Err(Error::Internal(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"value_width": 24}}"#).unwrap();

        let config: ReportConfig = from_file(file.path()).unwrap();
        assert_eq!(config.value_width, 24);
    }

    #[test]
    fn test_from_file_missing() {
        let result: InternalResult<ReportConfig> = from_file("/nonexistent/cxxlex.json");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to open config file"));
    }

    #[test]
    fn test_duration_secs_roundtrip() {
        let timed: Timed = from_str(r#"{"timeout": 30}"#).unwrap();
        assert_eq!(timed.timeout, Duration::from_secs(30));
        assert_eq!(serde_json::to_string(&timed).unwrap(), r#"{"timeout":30}"#);
    }
}
