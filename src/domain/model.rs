use crate::domain::ports::{DeepClone, ShallowCopy};
use crate::domain::shared::Shared;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// 業餘愛好. Equality and hashing go through `name`, so two hobbies with the
/// same name collapse into one entry of a hobby set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hobby {
    name: String,
}

impl Hobby {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Hobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 程序員
#[derive(Debug, PartialEq)]
pub struct Programmer {
    name: String,
    age: u32,
    certifications: Shared<Vec<String>>,
    hobbies: Shared<HashSet<Hobby>>,
    deposit_card_balances: Shared<Vec<f64>>,
    // None until languages are assigned
    skilled_languages: Option<Shared<Vec<String>>>,
}

impl Programmer {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            certifications: Shared::default(),
            hobbies: Shared::default(),
            deposit_card_balances: Shared::default(),
            skilled_languages: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn add_certificate(&mut self, certificate: impl Into<String>) {
        self.certifications.borrow_mut().push(certificate.into());
    }

    /// Returns false when an equal hobby was already present.
    pub fn add_hobby(&mut self, hobby: Hobby) -> bool {
        self.hobbies.borrow_mut().insert(hobby)
    }

    pub fn add_deposit_card_balance(&mut self, balance: f64) {
        self.deposit_card_balances.borrow_mut().push(balance);
    }

    /// Points the field at a brand-new language list. Any copy aliasing the
    /// previous list keeps it.
    pub fn set_skilled_languages<I, S>(&mut self, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let languages = languages.into_iter().map(Into::into).collect();
        self.skilled_languages = Some(Shared::new(languages));
    }

    /// Overwrites the first `from` entry in place. Returns false when the
    /// languages are unset or `from` is not among them.
    pub fn replace_skilled_language(&mut self, from: &str, to: impl Into<String>) -> bool {
        let Some(languages) = &self.skilled_languages else {
            return false;
        };
        let mut languages = languages.borrow_mut();
        match languages.iter_mut().find(|language| language.as_str() == from) {
            Some(slot) => {
                *slot = to.into();
                true
            }
            None => false,
        }
    }

    pub fn certifications(&self) -> Vec<String> {
        self.certifications.snapshot()
    }

    pub fn hobbies(&self) -> HashSet<Hobby> {
        self.hobbies.snapshot()
    }

    /// Hobby names in sorted order.
    pub fn hobby_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .hobbies
            .borrow()
            .iter()
            .map(|hobby| hobby.name().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn deposit_card_balances(&self) -> Vec<f64> {
        self.deposit_card_balances.snapshot()
    }

    pub fn total_balance(&self) -> f64 {
        self.deposit_card_balances.borrow().iter().sum()
    }

    pub fn skilled_languages(&self) -> Option<Vec<String>> {
        self.skilled_languages.as_ref().map(Shared::snapshot)
    }

    /// True if any mutable container is reachable from both programmers.
    pub fn shares_state_with(&self, other: &Programmer) -> bool {
        let languages_shared = match (&self.skilled_languages, &other.skilled_languages) {
            (Some(a), Some(b)) => Shared::is_same(a, b),
            _ => false,
        };
        Shared::is_same(&self.certifications, &other.certifications)
            || Shared::is_same(&self.hobbies, &other.hobbies)
            || Shared::is_same(&self.deposit_card_balances, &other.deposit_card_balances)
            || languages_shared
    }

    pub fn snapshot(&self) -> ProgrammerSnapshot {
        ProgrammerSnapshot {
            name: self.name.clone(),
            age: self.age,
            certifications: self.certifications(),
            hobbies: self.hobby_names(),
            deposit_card_balances: self.deposit_card_balances(),
            skilled_languages: self.skilled_languages(),
        }
    }
}

impl ShallowCopy for Programmer {
    fn shallow_copy(&self) -> Result<Self> {
        tracing::debug!("shallow copy of programmer {}", self.name);
        Ok(Self {
            name: self.name.clone(),
            age: self.age,
            certifications: self.certifications.alias(),
            hobbies: self.hobbies.alias(),
            deposit_card_balances: self.deposit_card_balances.alias(),
            skilled_languages: self.skilled_languages.as_ref().map(Shared::alias),
        })
    }
}

impl DeepClone for Programmer {
    // Hobby is immutable, so copying the set is enough.
    fn reown_containers(&mut self) {
        tracing::debug!("re-owning containers of programmer {}", self.name);
        self.certifications = self.certifications.detach();
        self.hobbies = self.hobbies.detach();
        self.deposit_card_balances = self.deposit_card_balances.detach();
        self.skilled_languages = self.skilled_languages.as_ref().map(Shared::detach);
    }
}

impl fmt::Display for Programmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// Plain owned view of a [`Programmer`], used for JSON output and assertions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgrammerSnapshot {
    pub name: String,
    pub age: u32,
    pub certifications: Vec<String>,
    pub hobbies: Vec<String>,
    pub deposit_card_balances: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skilled_languages: Option<Vec<String>>,
}

/// One line per field. Absent languages are left out.
impl fmt::Display for ProgrammerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let balances: Vec<String> = self
            .deposit_card_balances
            .iter()
            .map(|balance| format!("{:?}", balance))
            .collect();

        writeln!(f, "{}, {}", self.name, self.age)?;
        writeln!(f, "certifications: [{}]", self.certifications.join(", "))?;
        writeln!(f, "hobbies: [{}]", self.hobbies.join(", "))?;
        writeln!(f, "depositCardBalances: [{}]", balances.join(", "))?;
        if let Some(languages) = &self.skilled_languages {
            writeln!(f, "skilledLanguages: [{}]", languages.join(", "))?;
        }
        Ok(())
    }
}
