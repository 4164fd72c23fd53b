use crate::utils::error::{DemoError, Result};

/// Field-wise duplication primitive.
///
/// Scalars are copied and container handles are aliased, so the result shares
/// every mutable container with its source. The provided method refuses with
/// [`DemoError::CloneUnsupported`]; a type opts in by overriding it.
pub trait ShallowCopy: Sized {
    fn shallow_copy(&self) -> Result<Self> {
        Err(DemoError::unsupported::<Self>())
    }
}

/// Clone contract: the result is structurally equal to the source at the time
/// of the call and shares no mutable container with it afterwards.
pub trait DeepClone: ShallowCopy {
    /// Swap every aliased container handle for a freshly allocated copy.
    fn reown_containers(&mut self);

    fn deep_clone(&self) -> Result<Self> {
        let mut copy = self.shallow_copy()?;
        copy.reown_containers();
        Ok(copy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CopyMode {
    Shallow,
    #[default]
    Deep,
}

impl std::fmt::Display for CopyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyMode::Shallow => write!(f, "shallow"),
            CopyMode::Deep => write!(f, "deep"),
        }
    }
}

pub fn duplicate<T: DeepClone>(value: &T, mode: CopyMode) -> Result<T> {
    match mode {
        CopyMode::Shallow => value.shallow_copy(),
        CopyMode::Deep => value.deep_clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sealed;

    impl ShallowCopy for Sealed {}

    impl DeepClone for Sealed {
        fn reown_containers(&mut self) {}
    }

    #[test]
    fn types_without_a_shallow_copy_refuse_to_clone() {
        let err = match Sealed.deep_clone() {
            Err(e) => e,
            Ok(_) => panic!("clone should have been refused"),
        };
        match err {
            DemoError::CloneUnsupported { type_name } => assert!(type_name.ends_with("Sealed")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn duplicate_propagates_the_refusal_in_both_modes() {
        assert!(duplicate(&Sealed, CopyMode::Shallow).is_err());
        assert!(duplicate(&Sealed, CopyMode::Deep).is_err());
    }

    #[test]
    fn copy_mode_defaults_to_deep() {
        assert_eq!(CopyMode::default(), CopyMode::Deep);
        assert_eq!(CopyMode::Shallow.to_string(), "shallow");
    }
}
