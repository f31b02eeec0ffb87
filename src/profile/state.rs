use super::age::Age;

/// The form's state record. Every update builds a new value from the
/// previous one with a single field overridden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub name: String,
    pub age: Age,
    pub count: i64,
}

impl ProfileState {
    pub fn set_name(&self, text: &str) -> Self {
        Self {
            name: text.to_string(),
            ..self.clone()
        }
    }

    pub fn set_age(&self, text: &str) -> Self {
        Self {
            age: Age::coerce(text),
            ..self.clone()
        }
    }

    pub fn increment_count(&self) -> Self {
        Self {
            count: self.count.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn decrement_count(&self) -> Self {
        Self {
            count: self.count.saturating_sub(1),
            ..self.clone()
        }
    }

    pub fn reset_count(&self) -> Self {
        Self {
            count: 0,
            ..self.clone()
        }
    }

    pub fn name_line(&self) -> String {
        format!("name: {}", self.name)
    }

    pub fn age_line(&self) -> String {
        format!("age: {}", self.age)
    }

    pub fn count_line(&self) -> String {
        format!("count: {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileState {
        ProfileState {
            name: "Mina".into(),
            age: Age::Number(41.0),
            count: -3,
        }
    }

    #[test]
    fn test_defaults() {
        let state = ProfileState::default();
        assert_eq!(state.name, "");
        assert_eq!(state.age, Age::Number(0.0));
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_set_name_keeps_other_fields() {
        let before = sample();
        let after = before.set_name("Jo");
        assert_eq!(after.name, "Jo");
        assert_eq!(after.age, before.age);
        assert_eq!(after.count, before.count);
    }

    #[test]
    fn test_set_age_keeps_other_fields() {
        let before = sample();
        for text in ["12", "", "abc", "1e2"] {
            let after = before.set_age(text);
            assert_eq!(after.name, before.name);
            assert_eq!(after.count, before.count);
        }
    }

    #[test]
    fn test_counter_keeps_profile_fields() {
        let before = sample();
        for after in [
            before.increment_count(),
            before.decrement_count(),
            before.reset_count(),
        ] {
            assert_eq!(after.name, before.name);
            assert_eq!(after.age, before.age);
        }
    }

    #[test]
    fn test_counter_additivity() {
        for start in [-4i64, 0, 9] {
            for inc in 0..5 {
                for dec in 0..7 {
                    let mut state = ProfileState {
                        count: start,
                        ..ProfileState::default()
                    };
                    for _ in 0..inc {
                        state = state.increment_count();
                    }
                    for _ in 0..dec {
                        state = state.decrement_count();
                    }
                    assert_eq!(state.count, start + inc - dec);
                }
            }
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let once = sample().reset_count();
        let twice = once.reset_count();
        assert_eq!(once, twice);
        assert_eq!(twice.count, 0);
    }

    #[test]
    fn test_previous_state_is_untouched() {
        let before = sample();
        let _ = before.increment_count().set_name("x").set_age("7");
        assert_eq!(before, sample());
    }

    #[test]
    fn test_display_lines() {
        let state = ProfileState::default().set_age("abc");
        assert_eq!(state.name_line(), "name: ");
        assert_eq!(state.age_line(), "age: NaN");
        assert_eq!(state.count_line(), "count: 0");
    }
}
