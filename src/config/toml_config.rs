use crate::domain::{Hobby, Programmer};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub programmer: ProgrammerProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgrammerProfile {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub deposit_card_balances: Vec<f64>,
    pub skilled_languages: Option<Vec<String>>,
}

impl ProfileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROGRAMMER_NAME}), 未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the programmer through the same add operations a caller would use.
    pub fn build_programmer(&self) -> Programmer {
        let profile = &self.programmer;
        let mut programmer = Programmer::new(profile.name.clone(), profile.age);

        for certificate in &profile.certifications {
            programmer.add_certificate(certificate.clone());
        }
        for hobby in &profile.hobbies {
            if !programmer.add_hobby(Hobby::new(hobby.clone())) {
                tracing::warn!("⚠️ Duplicate hobby '{}' ignored", hobby);
            }
        }
        for balance in &profile.deposit_card_balances {
            programmer.add_deposit_card_balance(*balance);
        }
        if let Some(languages) = &profile.skilled_languages {
            programmer.set_skilled_languages(languages.iter().cloned());
        }

        programmer
    }
}

impl Default for ProfileConfig {
    /// John, 30: certificate A, football, one card with 1000.5, C++ and PHP.
    fn default() -> Self {
        Self {
            programmer: ProgrammerProfile {
                name: "John".to_string(),
                age: 30,
                certifications: vec!["A".to_string()],
                hobbies: vec!["football".to_string()],
                deposit_card_balances: vec![1000.5],
                skilled_languages: Some(vec!["C++".to_string(), "PHP".to_string()]),
            },
        }
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        let profile = &self.programmer;
        validation::validate_non_empty_string("programmer.name", &profile.name)?;
        validation::validate_resolved("programmer.name", &profile.name)?;
        validation::validate_range("programmer.age", profile.age, 0, MAX_AGE)?;
        for certificate in &profile.certifications {
            validation::validate_resolved("programmer.certifications", certificate)?;
        }
        for hobby in &profile.hobbies {
            validation::validate_non_empty_string("programmer.hobbies", hobby)?;
            validation::validate_resolved("programmer.hobbies", hobby)?;
        }
        for language in profile.skilled_languages.iter().flatten() {
            validation::validate_resolved("programmer.skilled_languages", language)?;
        }
        validation::validate_finite(
            "programmer.deposit_card_balances",
            &profile.deposit_card_balances,
        )?;
        Ok(())
    }
}
