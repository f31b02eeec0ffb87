use super::intent::ProfileIntent;
use super::state::ProfileState;

/// Apply an intent to the state and return the new state.
///
/// Pure: the previous state is only read. Every intent is total, so there is
/// no error path.
pub fn reduce(state: &ProfileState, intent: ProfileIntent) -> ProfileState {
    match intent {
        ProfileIntent::SetName(text) => state.set_name(&text),
        ProfileIntent::SetAge(text) => state.set_age(&text),
        ProfileIntent::IncrementCount => state.increment_count(),
        ProfileIntent::DecrementCount => state.decrement_count(),
        ProfileIntent::ResetCount => state.reset_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Age;

    fn run(intents: Vec<ProfileIntent>) -> ProfileState {
        intents
            .into_iter()
            .fold(ProfileState::default(), |state, intent| reduce(&state, intent))
    }

    #[test]
    fn test_end_to_end_scenario() {
        let state = run(vec![
            ProfileIntent::SetName("Ana".into()),
            ProfileIntent::SetAge("30".into()),
            ProfileIntent::IncrementCount,
            ProfileIntent::IncrementCount,
            ProfileIntent::IncrementCount,
            ProfileIntent::DecrementCount,
        ]);
        assert_eq!(
            state,
            ProfileState {
                name: "Ana".into(),
                age: Age::Number(30.0),
                count: 2,
            }
        );
        assert_eq!(state.name_line(), "name: Ana");
        assert_eq!(state.age_line(), "age: 30");
        assert_eq!(state.count_line(), "count: 2");
    }

    #[test]
    fn test_age_coercion_through_reducer() {
        let state = run(vec![ProfileIntent::SetAge("25".into())]);
        assert_eq!(state.age, Age::Number(25.0));
        assert_eq!(state.age.input_text(), "25");

        let state = run(vec![ProfileIntent::SetAge("".into())]);
        assert_eq!(state.age.input_text(), "");

        let state = run(vec![ProfileIntent::SetAge("abc".into())]);
        assert_eq!(state.age, Age::NotANumber);
        assert_eq!(state.age.input_text(), "");
    }

    #[test]
    fn test_decrement_below_zero() {
        let state = run(vec![
            ProfileIntent::DecrementCount,
            ProfileIntent::DecrementCount,
        ]);
        assert_eq!(state.count, -2);
    }

    #[test]
    fn test_reset_after_many_changes() {
        let state = run(vec![
            ProfileIntent::SetName("Bo".into()),
            ProfileIntent::IncrementCount,
            ProfileIntent::IncrementCount,
            ProfileIntent::ResetCount,
            ProfileIntent::ResetCount,
        ]);
        assert_eq!(state.count, 0);
        assert_eq!(state.name, "Bo");
    }
}
