use crate::config::toml_config::ProfileConfig;
use crate::core::report::{render_step, OutputFormat, StepOutcome};
use crate::domain::{duplicate, CopyMode, Hobby, Programmer};
use crate::utils::error::Result;
use std::io::Write;

/// A change applied to the original programmer only.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Rename(String),
    SetAge(u32),
    AddCertificate(String),
    AddHobby(String),
    AddBalance(f64),
    ReplaceLanguage { from: String, to: String },
}

impl Mutation {
    pub fn banner(&self) -> String {
        match self {
            Mutation::Rename(name) => format!("change name to {}", name),
            Mutation::SetAge(age) => format!("change age to {}", age),
            Mutation::AddCertificate(cert) => format!("add a new certificate {}", cert),
            Mutation::AddHobby(hobby) => format!("add a new hobby {}", hobby),
            Mutation::AddBalance(balance) => {
                format!("add a new deposit card balance {:?}", balance)
            }
            Mutation::ReplaceLanguage { from, to } => {
                format!("replace skilled language {} with {}", from, to)
            }
        }
    }

    pub fn apply(&self, programmer: &mut Programmer) {
        match self {
            Mutation::Rename(name) => programmer.set_name(name.clone()),
            Mutation::SetAge(age) => programmer.set_age(*age),
            Mutation::AddCertificate(cert) => programmer.add_certificate(cert.clone()),
            Mutation::AddHobby(hobby) => {
                if !programmer.add_hobby(Hobby::new(hobby.clone())) {
                    tracing::debug!("hobby {} already present", hobby);
                }
            }
            Mutation::AddBalance(balance) => programmer.add_deposit_card_balance(*balance),
            Mutation::ReplaceLanguage { from, to } => {
                if !programmer.replace_skilled_language(from, to.clone()) {
                    tracing::warn!("🔶 Language {} not found, nothing replaced", from);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub profile: ProfileConfig,
    pub mutations: Vec<Mutation>,
}

impl Scenario {
    /// Same mutations as [`Scenario::standard`], applied to a custom starting profile.
    pub fn with_profile(profile: ProfileConfig) -> Self {
        Self {
            profile,
            mutations: vec![
                Mutation::Rename("Mike".to_string()),
                Mutation::SetAge(35),
                Mutation::AddCertificate("B".to_string()),
                Mutation::AddHobby("tennis".to_string()),
                Mutation::AddBalance(5000.0),
                Mutation::ReplaceLanguage {
                    from: "PHP".to_string(),
                    to: "Java".to_string(),
                },
            ],
        }
    }

    /// John, 30, cloned and then renamed, aged, and given a new certificate,
    /// hobby, card and language.
    pub fn standard() -> Self {
        Self::with_profile(ProfileConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct DemoReport {
    pub mode: CopyMode,
    pub steps: Vec<StepOutcome>,
}

impl DemoReport {
    /// Banners of the steps after which the clone had drifted from its initial state.
    pub fn leaked_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|step| step.clone_changed)
            .filter_map(|step| step.banner.as_deref())
            .collect()
    }

    pub fn clone_unchanged(&self) -> bool {
        self.steps.iter().all(|step| !step.clone_changed)
    }
}

pub struct CloneDemo {
    scenario: Scenario,
    mode: CopyMode,
    format: OutputFormat,
}

impl CloneDemo {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            mode: CopyMode::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_mode(mut self, mode: CopyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoReport> {
        tracing::info!("🚀 Starting clone demo ({} copy)", self.mode);

        let mut original = self.scenario.profile.build_programmer();
        let clone = duplicate(&original, self.mode)?;
        let clone_at_start = clone.snapshot();

        tracing::info!(
            "📋 Clone created, shares state with original: {}",
            clone.shares_state_with(&original)
        );

        let mut steps = Vec::with_capacity(self.scenario.mutations.len() + 1);
        let initial = StepOutcome {
            step: 0,
            banner: None,
            original: original.snapshot(),
            clone: clone_at_start.clone(),
            clone_changed: false,
        };
        render_step(out, self.format, &initial)?;
        steps.push(initial);

        for (index, mutation) in self.scenario.mutations.iter().enumerate() {
            mutation.apply(&mut original);

            let clone_now = clone.snapshot();
            let outcome = StepOutcome {
                step: index + 1,
                banner: Some(mutation.banner()),
                original: original.snapshot(),
                clone_changed: clone_now != clone_at_start,
                clone: clone_now,
            };
            if outcome.clone_changed {
                tracing::debug!("clone changed after '{}'", mutation.banner());
            }
            render_step(out, self.format, &outcome)?;
            steps.push(outcome);
        }

        out.flush()?;

        let report = DemoReport {
            mode: self.mode,
            steps,
        };
        tracing::info!(
            "✅ Demo finished, {} step(s) leaked into the clone",
            report.leaked_steps().len()
        );
        Ok(report)
    }
}
