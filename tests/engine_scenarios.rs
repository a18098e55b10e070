//! End-to-end scenarios through the public API.

use linear_fsm::builder::{cycle, FsmConfigBuilder, StateBuilder};
use linear_fsm::{ConfigError, Fsm, FsmConfig, FsmError, BOOTSTRAP_STATE};
use std::sync::Arc;

const DOOR_YAML: &str = r#"
initial: closed
states:
  closed:
    transitions:
      open: opened
      lock: locked
  opened:
    transitions:
      close: closed
  locked:
    transitions:
      unlock: closed
"#;

#[test]
fn door_walkthrough_from_yaml() {
    let mut door = Fsm::from_yaml_str(DOOR_YAML).unwrap();
    assert_eq!(door.state(), BOOTSTRAP_STATE);

    door.reset().unwrap();
    door.trigger("lock").unwrap();
    assert_eq!(door.state(), "locked");

    assert!(matches!(
        door.trigger("open"),
        Err(FsmError::NoTransition { .. })
    ));

    door.trigger("unlock").unwrap();
    door.trigger("open").unwrap();
    assert_eq!(
        door.history().path(),
        vec![BOOTSTRAP_STATE, "closed", "locked", "closed", "opened"]
    );

    assert!(door.undo());
    assert!(door.undo());
    assert_eq!(door.state(), "locked");
    assert!(door.redo());
    assert_eq!(door.state(), "closed");

    door.trigger("lock").unwrap();
    assert!(!door.redo());
    assert_eq!(door.history().len(), 5);
}

#[test]
fn states_query_uses_declaration_order() {
    let door = Fsm::from_yaml_str(DOOR_YAML).unwrap();

    assert_eq!(door.states(None), vec!["closed", "opened", "locked"]);
    assert_eq!(door.states(Some("close")), vec!["opened"]);
    assert!(door.states(Some("kick")).is_empty());
}

#[test]
fn builder_config_drives_engine() {
    let config = FsmConfigBuilder::new()
        .initial("queued")
        .state(StateBuilder::new("queued").on("run", "running"))
        .and_then(|b| b.state(StateBuilder::new("running").on("finish", "done")))
        .and_then(|b| b.state(StateBuilder::new("done").terminal()))
        .and_then(|b| b.build())
        .unwrap();

    let mut job = Fsm::new(config).unwrap();
    job.reset().unwrap();
    job.trigger("run").unwrap();
    job.trigger("finish").unwrap();

    assert_eq!(job.state(), "done");
    assert!(job.events().is_empty());
    assert!(job.trigger("run").is_err());

    // Direct changes ignore the event tables.
    job.change_state("queued").unwrap();
    assert_eq!(job.state(), "queued");
}

#[test]
fn shared_config_across_threads() {
    let config = Arc::new(cycle("next", ["red", "green", "yellow"]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|steps| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || {
                let mut light = Fsm::new(config).unwrap();
                light.reset().unwrap();
                for _ in 0..steps {
                    light.trigger("next").unwrap();
                }
                light.state().to_string()
            })
        })
        .collect();

    let states: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(states, vec!["red", "green", "yellow", "red"]);
}

#[test]
fn missing_and_invalid_configs_fail_construction() {
    assert!(matches!(
        Fsm::try_from_option(None),
        Err(FsmError::Config(ConfigError::Missing))
    ));
    assert!(matches!(
        Fsm::from_json_str(r#"{"states": {"a": {}}}"#),
        Err(FsmError::Config(ConfigError::EmptyInitial))
    ));
    assert!(matches!(
        Fsm::new(FsmConfig::new("a")),
        Err(FsmError::Config(ConfigError::UnknownInitial { .. }))
    ));
}

#[test]
fn history_serializes_for_inspection() {
    let mut light = Fsm::new(cycle("next", ["red", "green"]).unwrap()).unwrap();
    light.reset().unwrap();
    light.trigger("next").unwrap();
    light.undo();

    let json = serde_json::to_value(light.history()).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["start"], "red");
    assert_eq!(records[2]["end"], "green");
    assert_eq!(records[2]["undone"], true);
}
