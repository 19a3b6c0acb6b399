//! End-to-end run of a namespace rename through the dispatcher.
//!
//! A namespace is renamed from "sales" to "sales-eu" by user U42; a
//! `beforeUpdate` trigger's script inspects the encoded arguments and
//! answers with a single `namespace` entry, which lands on the event.

use std::future::Future;
use std::sync::Mutex;

use hookline_app::TriggerDispatcher;
use hookline_app::ports::ScriptRunner;
use hookline_domain::error::HooklineError;
use hookline_domain::event::args::keys;
use hookline_domain::event::{Args, Envelope, EventKind, NamespaceEvent};
use hookline_domain::id::UserId;
use hookline_domain::invoker::Invoker;
use hookline_domain::namespace::Namespace;
use hookline_domain::trigger::Trigger;

/// Appends "-confirmed" to the namespace name it receives.
#[derive(Default)]
struct ConfirmRename {
    seen: Mutex<Vec<Args>>,
}

impl ScriptRunner for ConfirmRename {
    fn run(
        &self,
        _script: &str,
        args: Args,
    ) -> impl Future<Output = Result<Args, HooklineError>> + Send {
        let current: serde_json::Value = serde_json::from_slice(&args[keys::NAMESPACE]).unwrap();
        let name = format!("{}-confirmed", current["name"].as_str().unwrap());
        self.seen.lock().unwrap().push(args);

        let out = Args::from([(
            keys::NAMESPACE.to_string(),
            serde_json::to_vec(&serde_json::json!({ "name": name })).unwrap(),
        )]);
        async move { Ok(out) }
    }
}

fn u42() -> UserId {
    "00000000-0000-0000-0000-00000000002a".parse().unwrap()
}

fn rename_envelope() -> Envelope<NamespaceEvent> {
    let previous = Namespace::builder()
        .name("sales")
        .slug("sales")
        .build()
        .unwrap();
    let mut current = previous.clone();
    current.name = "sales-eu".to_string();

    let resource = NamespaceEvent::new(current, Some(previous), Invoker::new(u42()));
    Envelope::new(EventKind::BeforeUpdate, resource).unwrap()
}

fn confirm_trigger() -> Trigger {
    Trigger::builder()
        .name("Confirm rename")
        .resource_type(NamespaceEvent::RESOURCE_TYPE)
        .on(EventKind::BeforeUpdate)
        .script("confirm-rename")
        .build()
        .unwrap()
}

#[tokio::test]
async fn should_encode_current_previous_and_invoker() {
    let envelope = rename_envelope();

    let args = envelope.encode().unwrap();

    let keys: Vec<_> = args.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["invoker", "namespace", "oldNamespace"]);
    let old: serde_json::Value = serde_json::from_slice(&args["oldNamespace"]).unwrap();
    assert_eq!(old["name"], "sales");
    let invoker: serde_json::Value = serde_json::from_slice(&args["invoker"]).unwrap();
    assert_eq!(invoker["id"], u42().to_string());
}

#[tokio::test]
async fn should_apply_confirmed_name_returned_by_script() {
    let dispatcher = TriggerDispatcher::new(ConfirmRename::default());
    let mut envelope = rename_envelope();

    let fired = dispatcher
        .dispatch(&mut envelope, &[confirm_trigger()])
        .await
        .into_result()
        .unwrap();

    assert_eq!(fired.len(), 1);
    let event = envelope.into_resource();
    assert_eq!(event.namespace().name, "sales-eu-confirmed");
    assert_eq!(event.namespace().slug, "sales");
    assert_eq!(event.old_namespace().map(|ns| ns.name.as_str()), Some("sales"));
    assert_eq!(event.invoker().id, u42());
}

#[tokio::test]
async fn should_not_fire_after_update_trigger_for_before_update_event() {
    let runner = ConfirmRename::default();
    let after = Trigger::builder()
        .name("Audit rename")
        .resource_type(NamespaceEvent::RESOURCE_TYPE)
        .on(EventKind::AfterUpdate)
        .script("audit")
        .build()
        .unwrap();
    let dispatcher = TriggerDispatcher::new(runner);
    let mut envelope = rename_envelope();

    let report = dispatcher.dispatch(&mut envelope, &[after]).await;

    assert!(report.fired().is_empty());
    assert_eq!(envelope.resource().namespace().name, "sales-eu");
}
