//! Data hook for ledger aliases by role.

#[cfg(test)]
#[path = "aliases_test.rs"]
mod aliases_test;

use leptos::prelude::*;

use crate::net::api::{HttpApi, TraceApi};
use crate::util::mount_guard::MountGuard;

/// Fetch aliases for `role`; failures resolve to an empty list.
pub async fn load_aliases(api: &dyn TraceApi, role: &str) -> Vec<String> {
    match api.aliases_by_role(role).await {
        Ok(mut aliases) => {
            aliases.retain(|a| !a.trim().is_empty());
            aliases.dedup();
            aliases
        }
        Err(err) => {
            log::warn!("Failed to fetch {role} aliases: {err}");
            Vec::new()
        }
    }
}

/// Reactive alias list for `role`, loaded once on mount.
pub fn use_aliases(role: &'static str) -> ReadSignal<Vec<String>> {
    let api = expect_context::<HttpApi>();
    let (aliases, set_aliases) = signal(Vec::<String>::new());
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let list = load_aliases(&api, role).await;
        guard.deliver(list, |list| set_aliases.set(list));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, set_aliases, guard, role);

    aliases
}
