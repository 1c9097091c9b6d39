use crate::shared::js_interop;
use contracts::domain::a001_person::{Person, PersonField, PersonRules};
use contracts::shared::config;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;
use std::sync::Arc;

/// ViewModel for Person details form
#[derive(Clone)]
pub struct PersonDetailsViewModel {
    pub form: RwSignal<Person, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    rules: Arc<PersonRules>,
}

impl PersonDetailsViewModel {
    pub fn new() -> Self {
        Self::with_rules(load_rules())
    }

    pub fn with_rules(rules: PersonRules) -> Self {
        let form = RwSignal::new_local(Person::new());
        let rules = Arc::new(rules);

        let log_rules = rules.clone();
        form.with_untracked(|person| {
            person.errors_changed().subscribe(move |args| {
                let finding =
                    form.with_untracked(|p| p.errors_with(&log_rules, Some(args.field)).next());
                log::debug!("{}: {}", args.field, finding.as_deref().unwrap_or("ok"));
            })
        });

        Self {
            form,
            error: RwSignal::new(None),
            rules,
        }
    }

    pub fn full_name(&self) -> String {
        self.form.with(Person::full_name)
    }

    /// First message for the field; tracked, re-runs when the form changes
    pub fn error_for(&self, field: PersonField) -> Option<String> {
        self.form
            .with(|p| p.errors_with(&self.rules, Some(field)).next())
    }

    pub fn has_errors(&self) -> bool {
        self.form
            .with(|p| p.errors_with(&self.rules, None).next().is_some())
    }

    pub fn set_first_name(&self, value: String) {
        self.edit(PersonField::FirstName, |p| p.first_name = value);
    }

    pub fn set_last_name(&self, value: String) {
        self.edit(PersonField::LastName, |p| p.last_name = value);
    }

    /// Non-numeric input leaves the previous age in place
    pub fn set_age_input(&self, input: &str) {
        match parse_age(input) {
            Some(age) => self.edit(PersonField::Age, |p| p.age = age),
            None => log::debug!("ignoring age input {:?}", input),
        }
    }

    /// Ask the host for the first name
    pub fn ask_first_name(&self) {
        match js_interop::prompt("First name?") {
            Ok(Some(name)) => {
                log::info!("first name from prompt: {}", name);
                self.set_first_name(name);
            }
            Ok(None) => log::debug!("prompt cancelled"),
            Err(e) => {
                log::warn!("prompt failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(Person)>) -> impl Fn() + '_ {
        move || {
            let person = self.form.get_untracked();
            match person.validate_with(&self.rules) {
                Ok(()) => {
                    log::info!("person saved: {}", person.full_name());
                    self.error.set(None);
                    on_saved(person);
                }
                Err(e) => {
                    log::warn!("person not saved: {}", e);
                    self.error.set(Some(e.to_string()));
                }
            }
        }
    }

    fn edit(&self, field: PersonField, apply: impl FnOnce(&mut Person)) {
        self.form.update(apply);
        // Handlers read the form, so notify after the write guard is gone.
        let errors_changed = self.form.with_untracked(|p| p.errors_changed().clone());
        errors_changed.notify(field);
    }
}

impl Default for PersonDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the age input; surrounding whitespace is ignored
pub fn parse_age(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

fn load_rules() -> PersonRules {
    match config::load_rules(None) {
        Ok(rules) => rules,
        Err(e) => {
            log::warn!("using built-in person rules: {}", e);
            PersonRules::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::RefCell;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("18"), Some(18));
        assert_eq!(parse_age(" 42 "), Some(42));
        assert_eq!(parse_age("-3"), Some(-3));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("1.5"), None);
    }

    #[test]
    fn test_edits_update_findings() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = PersonDetailsViewModel::with_rules(PersonRules::DEFAULT);
            assert!(vm.has_errors());
            assert_eq!(
                vm.error_for(PersonField::FirstName).as_deref(),
                Some("firstName is mandatory")
            );

            vm.set_first_name("Alice".into());
            vm.set_last_name("Smith".into());
            vm.set_age_input("30");
            vm.set_age_input("thirty");

            assert_eq!(vm.form.get_untracked().age, 30);
            assert_eq!(vm.full_name(), "Alice Smith");
            assert!(!vm.has_errors());
        });
    }

    #[test]
    fn test_edits_notify_subscribers() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = PersonDetailsViewModel::with_rules(PersonRules::DEFAULT);
            let seen = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            vm.form.with_untracked(|p| {
                p.errors_changed()
                    .subscribe(move |args| sink.borrow_mut().push(args.field))
            });

            vm.set_last_name("Doe".into());
            vm.set_age_input("x");
            vm.set_age_input("20");

            assert_eq!(*seen.borrow(), vec![PersonField::LastName, PersonField::Age]);
        });
    }

    #[test]
    fn test_save_command() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = PersonDetailsViewModel::with_rules(PersonRules::DEFAULT);
            let saved = Rc::new(RefCell::new(Vec::new()));
            let sink = saved.clone();
            let on_saved: Rc<dyn Fn(Person)> =
                Rc::new(move |p: Person| {
                    assert_eq!(p.errors_changed().subscriber_count(), 0);
                    sink.borrow_mut().push(p.full_name());
                });

            vm.save_command(on_saved.clone())();
            assert!(saved.borrow().is_empty());
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("firstName is mandatory; lastName is mandatory; age should be at least 18")
            );

            vm.set_first_name("Alice".into());
            vm.set_last_name("Smith".into());
            vm.set_age_input("18");
            vm.save_command(on_saved)();

            assert_eq!(*saved.borrow(), vec!["Alice Smith"]);
            assert_eq!(vm.error.get_untracked(), None);
        });
    }
}
