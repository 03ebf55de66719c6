use std::fmt::{Debug, Display};

pub mod env_args;
#[cfg(test)]
pub mod test;

pub fn log_error<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log `e` under `message`, and give back the sentence shown to the user.
pub fn log_error_and_message<E: Debug + Display>(message: &str) -> impl FnOnce(E) -> String {
    move |e| {
        error!("{message}\n{e:#?}");
        format!("{message}: {e}")
    }
}

/// Refused requests are expected, they only deserve a warning.
pub fn log_rejection<E: Debug + Display>(e: E) -> String {
    warn!("{e:?}");
    e.to_string()
}
