use std::sync::Mutex;

// Env vars are process-global and cargo runs tests in parallel, so every
// config test funnels through this lock and restores what it touched.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the given environment variables set (`Some`) or removed
/// (`None`), restoring the previous values afterwards, including on panic.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");

    let saved: Vec<(&str, Option<String>)> = changes
        .iter()
        .map(|(key, _)| (*key, std::env::var(key).ok()))
        .collect();
    let _restore = RestoreEnv(saved);

    for (key, value) in changes {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    f()
}

struct RestoreEnv<'a>(Vec<(&'a str, Option<String>)>);

impl Drop for RestoreEnv<'_> {
    fn drop(&mut self) {
        for (key, value) in &self.0 {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
