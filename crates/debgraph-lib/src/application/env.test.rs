use super::*;

fn env_of(vars: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_empty_environment_keeps_intent() {
    let env = env_of(&[]);

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(
        env.apply_color_config(ColorIntent::Always),
        ColorIntent::Always
    );
}

#[test]
fn test_variable_names_are_read() {
    let env = env_of(&[("NO_COLOR", "1"), ("CLICOLOR", "0"), ("PATH", "/usr/bin")]);

    assert_eq!(env.no_color.as_deref(), Some("1"));
    assert_eq!(env.clicolor.as_deref(), Some("0"));
    assert_eq!(env.force_color, None);
}

#[test]
fn test_no_color_disables() {
    let env = env_of(&[("NO_COLOR", "1")]);

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_of(&[("NO_COLOR", "")]);

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let env = env_of(&[("CLICOLOR", "0")]);

    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env = env_of(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);

    assert_eq!(
        env.apply_color_config(ColorIntent::Auto),
        ColorIntent::Always
    );
}

#[test]
fn test_force_color_false_disables() {
    let env = env_of(&[("FORCE_COLOR", "false")]);

    assert_eq!(
        env.apply_color_config(ColorIntent::Always),
        ColorIntent::Never
    );
}

#[test]
fn test_ci_disables_everything() {
    let env = env_of(&[("CI", "true"), ("FORCE_COLOR", "3")]);

    assert_eq!(
        env.apply_color_config(ColorIntent::Always),
        ColorIntent::Never
    );
}
