use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod rules;

pub use rules::NameRules;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Optional YAML file overriding the built-in name rules
    /// (vocabulary, exceptions, permanent roster).
    #[serde(default = "default_rules_file")]
    pub rules_file: String,
}

fn default_page_size() -> usize {
    15
}

fn default_rules_file() -> String {
    Config::rules_file_path().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            page_size: default_page_size(),
            rules_file: default_rules_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dtrlogger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dtrlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dtrlogger.sqlite")
    }

    /// Return the full path of the optional name-rules override file
    pub fn rules_file_path() -> PathBuf {
        Self::config_dir().join("rules.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Resolve the name rules used by the ingest pipeline: the override
    /// file when present, the compiled-in tables otherwise.
    pub fn name_rules(&self) -> NameRules {
        let path = PathBuf::from(&self.rules_file);
        if path.exists() {
            match NameRules::load_file(&path) {
                Ok(rules) => return rules,
                Err(e) => {
                    eprintln!("⚠️ Failed to load {}: {} (using built-ins)", path.display(), e);
                }
            }
        }
        NameRules::default()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
