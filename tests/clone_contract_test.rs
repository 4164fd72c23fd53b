use clone_demo::{duplicate, CopyMode, DeepClone, DemoError, Hobby, Programmer, ShallowCopy};

fn john() -> Programmer {
    let mut programmer = Programmer::new("John", 30);
    programmer.add_certificate("A");
    programmer.add_hobby(Hobby::new("football"));
    programmer.add_deposit_card_balance(1000.5);
    programmer.set_skilled_languages(["C++", "PHP"]);
    programmer
}

#[test]
fn test_clone_is_equal_at_clone_time() {
    let original = john();
    let clone = original.deep_clone().unwrap();

    assert_eq!(clone, original);
    assert_eq!(clone.snapshot(), original.snapshot());
    assert!(!clone.shares_state_with(&original));
}

#[test]
fn test_mutating_original_leaves_clone_untouched() {
    let mut original = john();
    let clone = original.deep_clone().unwrap();

    original.set_name("Mike");
    original.set_age(35);
    original.add_certificate("B");
    original.add_hobby(Hobby::new("tennis"));
    original.add_deposit_card_balance(5000.0);
    assert!(original.replace_skilled_language("PHP", "Java"));

    assert_eq!(clone.name(), "John");
    assert_eq!(clone.age(), 30);
    assert_eq!(clone.certifications(), vec!["A"]);
    assert_eq!(clone.hobby_names(), vec!["football"]);
    assert_eq!(clone.deposit_card_balances(), vec![1000.5]);
    assert_eq!(clone.skilled_languages().unwrap(), vec!["C++", "PHP"]);
}

#[test]
fn test_mutating_clone_leaves_original_untouched() {
    let original = john();
    let mut clone = original.deep_clone().unwrap();

    clone.add_certificate("B");
    clone.add_hobby(Hobby::new("tennis"));
    clone.add_deposit_card_balance(5000.0);
    clone.replace_skilled_language("C++", "Rust");

    assert_eq!(original.certifications(), vec!["A"]);
    assert_eq!(original.hobby_names(), vec!["football"]);
    assert_eq!(original.deposit_card_balances(), vec![1000.5]);
    assert_eq!(original.skilled_languages().unwrap(), vec!["C++", "PHP"]);
}

#[test]
fn test_clone_of_clone_is_independent_of_its_source() {
    let original = john();
    let mut first = original.deep_clone().unwrap();
    let second = first.deep_clone().unwrap();

    assert_eq!(second, first);
    assert!(!second.shares_state_with(&first));
    assert!(!second.shares_state_with(&original));

    first.add_certificate("C");
    assert_eq!(second.certifications(), vec!["A"]);
}

#[test]
fn test_clone_with_unset_languages() {
    let mut original = Programmer::new("Ann", 25);
    original.add_certificate("A");

    let clone = original.deep_clone().unwrap();
    assert_eq!(clone.skilled_languages(), None);

    original.set_skilled_languages(["Go"]);
    assert_eq!(clone.skilled_languages(), None);
}

#[test]
fn test_hobby_set_deduplicates_by_value() {
    let mut programmer = Programmer::new("John", 30);
    programmer.add_hobby(Hobby::new("football"));
    programmer.add_hobby(Hobby::new("football"));

    assert_eq!(programmer.hobbies().len(), 1);
    assert_eq!(Hobby::new("football"), Hobby::new("football"));
}

#[test]
fn test_shallow_copy_leaks_container_mutations() {
    let mut original = john();
    let copy = duplicate(&original, CopyMode::Shallow).unwrap();

    original.set_name("Mike");
    original.add_certificate("B");
    original.add_hobby(Hobby::new("tennis"));
    original.add_deposit_card_balance(5000.0);
    original.replace_skilled_language("PHP", "Java");

    // scalars were copied
    assert_eq!(copy.name(), "John");
    // containers were aliased
    assert_eq!(copy.certifications(), vec!["A", "B"]);
    assert_eq!(copy.hobby_names(), vec!["football", "tennis"]);
    assert_eq!(copy.deposit_card_balances(), vec![1000.5, 5000.0]);
    assert_eq!(copy.skilled_languages().unwrap(), vec!["C++", "Java"]);
}

struct Vault {
    secrets: Vec<String>,
}

impl ShallowCopy for Vault {}

impl DeepClone for Vault {
    fn reown_containers(&mut self) {
        self.secrets = self.secrets.clone();
    }
}

#[test]
fn test_unsupported_clone_is_reported_not_swallowed() {
    let vault = Vault {
        secrets: vec!["pin".to_string()],
    };

    match vault.deep_clone() {
        Err(DemoError::CloneUnsupported { type_name }) => {
            assert!(type_name.contains("Vault"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("clone should not have succeeded"),
    }
    assert_eq!(vault.secrets.len(), 1);
}
