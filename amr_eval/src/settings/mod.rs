use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde_yaml;
use errors::*;

pub mod conf_alignment;

use self::conf_alignment::*;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // General arguments
    pub manual_seed: u8,
    // extract substructures of graph pairs in parallel
    pub parallel: bool,

    pub alignment: AlignmentConf
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            manual_seed: 120,
            parallel: true,
            alignment: AlignmentConf::default()
        }
    }
}

impl Settings {
    pub fn from_yaml_file<P: AsRef<Path>>(fsettings: P) -> Result<Settings> {
        let fsettings = fsettings.as_ref();
        let reader = BufReader::new(File::open(fsettings).chain_err(|| format!("Cannot open settings file {:?}", fsettings))?);
        let settings = serde_yaml::from_reader(reader).chain_err(|| format!("Invalid settings file {:?}", fsettings))?;
        Ok(settings)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
manual_seed: {}
parallel: {}
alignment: {:?}
**********************************************************************
"#,
    self.manual_seed,
    self.parallel,
    self.alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_partial_settings_use_defaults() {
        let settings: Settings = serde_yaml::from_str("parallel: false\nalignment:\n  n_restarts: 2\n").unwrap();
        assert_eq!(settings.manual_seed, 120);
        assert!(!settings.parallel);
        assert_eq!(settings.alignment.n_restarts, 2);
        assert_eq!(settings.alignment.max_permutation, AlignmentConf::default().max_permutation);
    }
}
