use std::env;

#[derive(Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// ENV decides the deployment environment; builds fall back to a default
/// matching their compile profile.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => match v.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}
