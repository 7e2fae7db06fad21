//! Tests for Agent tool dispatch, processing and memory logging.

use agentframe_core::{
    Agent, Context, Error, Memory, Message, Params, Responder, Role, Tool, param_str,
};
use serde_json::{Value, json};
use std::num::NonZeroUsize;

struct SimpleTool {
    name: &'static str,
}

impl Tool for SimpleTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Simple tool"
    }

    fn execute(&self, params: &Params) -> agentframe_core::Result<Value> {
        let value = param_str(params, "value")?;
        Ok(json!(format!("Processed: {value}")))
    }
}

fn simple() -> SimpleTool {
    SimpleTool { name: "simple" }
}

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

fn calculator(params: &Params) -> agentframe_core::Result<Value> {
    let a = params["a"].as_f64().unwrap_or_default();
    let b = params["b"].as_f64().unwrap_or_default();
    match param_str(params, "operation")? {
        "add" => Ok(json!(a + b)),
        "divide" if b == 0.0 => Err(Error::invalid("Cannot divide by zero")),
        "divide" => Ok(json!(a / b)),
        other => Err(Error::invalid(format!("Unsupported operation: {other}"))),
    }
}

#[test]
fn agent_creation() {
    let agent = Agent::new("TestAgent").with_description("A test agent");
    assert_eq!(agent.name(), "TestAgent");
    assert_eq!(agent.description(), "A test agent");
    assert!(agent.tools().is_empty());
    assert!(agent.memory().capacity().is_none());
}

#[test]
fn agent_with_max_memory() {
    let agent = Agent::new("TestAgent").max_memory(NonZeroUsize::new(5).unwrap());
    assert_eq!(agent.memory().capacity(), NonZeroUsize::new(5));
}

#[test]
fn add_tool_registers_name() {
    let mut agent = Agent::new("TestAgent");
    agent.add_tool(simple());
    assert!(agent.has_tool("simple"));
    assert_eq!(agent.tools(), ["simple"]);
}

#[test]
fn add_tool_overwrites_in_place() {
    let mut agent = Agent::new("TestAgent");
    agent.add_tool(simple());
    agent.register("other", "Other", |_| Ok(Value::Null));
    agent.register("simple", "Replacement", |_| Ok(json!("replaced")));

    assert_eq!(agent.tools(), ["simple", "other"]);
    assert_eq!(agent.tool("simple").unwrap().description(), "Replacement");
    assert_eq!(agent.use_tool("simple", Params::new()).unwrap(), "replaced");
}

#[test]
fn remove_tool() {
    let mut agent = Agent::new("TestAgent").with_tool(simple());
    assert!(agent.remove_tool("simple"));
    assert!(!agent.has_tool("simple"));
    assert!(!agent.remove_tool("simple"));
}

#[test]
fn remove_nonexistent_tool() {
    let mut agent = Agent::new("TestAgent");
    assert!(!agent.remove_tool("nonexistent"));
}

#[test]
fn use_tool_returns_result() {
    let mut agent = Agent::new("TestAgent").with_tool(simple());
    let result = agent.use_tool("simple", params(json!({ "value": "test" })));
    assert_eq!(result.unwrap(), "Processed: test");
}

#[test]
fn use_nonexistent_tool() {
    let mut agent = Agent::new("TestAgent");
    agent.process("before");
    let before = agent.history();

    let err = agent
        .use_tool("nonexistent", params(json!({ "value": "test" })))
        .unwrap_err();
    assert_eq!(err, Error::NotFound("nonexistent".into()));
    assert_eq!(err.to_string(), "tool 'nonexistent' not found");
    assert_eq!(agent.history(), before);
}

#[test]
fn tool_usage_logged_in_memory() {
    let mut agent = Agent::new("TestAgent").with_tool(simple());
    agent
        .use_tool("simple", params(json!({ "value": "test" })))
        .unwrap();

    let history = agent.history();
    assert_eq!(history.len(), 1);
    let msg = &history[0];
    assert_eq!(msg.role(), Role::Tool);
    assert_eq!(msg.content(), "Used tool 'simple': Processed: test");
    assert_eq!(msg.metadata()["tool"], "simple");
    assert_eq!(msg.metadata()["params"], json!({ "value": "test" }));
    assert_eq!(msg.metadata()["result"], "Processed: test");
}

#[test]
fn failed_tool_call_is_not_logged() {
    let mut agent = Agent::new("MathAgent");
    agent.register("calculator", "Math operations", calculator);

    let err = agent
        .use_tool(
            "calculator",
            params(json!({ "operation": "divide", "a": 1, "b": 0 })),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(agent.history().is_empty());

    let result = agent
        .use_tool(
            "calculator",
            params(json!({ "operation": "add", "a": 5, "b": 3 })),
        )
        .unwrap();
    assert_eq!(result, json!(8.0));
    assert_eq!(agent.history().len(), 1);
}

#[test]
fn receive_message_stores_as_is() {
    let mut agent = Agent::new("MetaAgent");
    let msg = Message::user("Test")
        .with_meta("source", "test")
        .with_meta("id", 123);
    agent.receive_message(msg.clone());

    let history = agent.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], msg);
    assert_eq!(history[0].metadata()["id"], 123);
}

#[test]
fn process_echoes_with_name() {
    let mut agent = Agent::new("TestAgent");
    let response = agent.process("Hello agent");
    assert_eq!(response, "TestAgent received: Hello agent");

    let history = agent.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role(), Role::User);
    assert_eq!(history[0].content(), "Hello agent");
    assert_eq!(history[1].role(), Role::Agent);
    assert_eq!(history[1].content(), response);
}

#[test]
fn process_always_adds_two() {
    let mut agent = Agent::new("TestAgent");
    for i in 0..4 {
        let before = agent.memory().len();
        agent.process(&format!("Message {i}"));
        assert_eq!(agent.memory().len(), before + 2);
    }
    assert_eq!(agent.history().len(), 8);
}

#[test]
fn bounded_agent_keeps_last_pairs() {
    let mut agent = Agent::new("LimitedAgent").max_memory(NonZeroUsize::new(4).unwrap());
    for i in 0..5 {
        agent.process(&format!("Message {i}"));
    }

    let history = agent.history();
    let contents: Vec<&str> = history.iter().map(|m| m.content()).collect();
    assert_eq!(
        contents,
        [
            "Message 3",
            "LimitedAgent received: Message 3",
            "Message 4",
            "LimitedAgent received: Message 4",
        ]
    );
}

#[test]
fn clear_history() {
    let mut agent = Agent::new("TestAgent");
    agent.process("Message 1");
    assert!(!agent.memory().is_empty());
    agent.clear_history();
    assert!(agent.history().is_empty());
}

#[test]
fn custom_responder_keeps_bracketing() {
    let mut agent = Agent::new("Custom")
        .respond_with(|_, input| format!("Custom processing: {}", input.to_uppercase()));
    let response = agent.process("hello");
    assert_eq!(response, "Custom processing: HELLO");
    assert_eq!(agent.history().len(), 2);
}

struct Counting {
    turns: usize,
}

impl Responder for Counting {
    fn respond(&mut self, ctx: &Context<'_>, input: &str) -> String {
        self.turns += 1;
        format!(
            "{} #{} ({} in memory, {} tools): {input}",
            ctx.name(),
            self.turns,
            ctx.memory().len(),
            ctx.tool_count()
        )
    }
}

#[test]
fn responder_sees_agent_context() {
    let mut agent = Agent::with_responder("Counter", Counting { turns: 0 }).with_tool(simple());
    assert_eq!(agent.process("a"), "Counter #1 (1 in memory, 1 tools): a");
    assert_eq!(agent.process("b"), "Counter #2 (3 in memory, 1 tools): b");
    assert_eq!(agent.responder().turns, 2);
}

#[test]
fn agent_display() {
    assert_eq!(Agent::new("MyAgent").to_string(), "Agent(MyAgent)");
}

#[test]
fn get_info() {
    let mut agent = Agent::new("TestAgent")
        .with_description("Test description")
        .with_tool(simple());
    agent.process("hi");

    let info = agent.info();
    assert_eq!(info.name, "TestAgent");
    assert_eq!(info.description, "Test description");
    assert_eq!(info.tools.len(), 1);
    assert_eq!(info.tools[0].name, "simple");
    assert_eq!(info.tools[0].description, "Simple tool");
    assert_eq!(info.memory_size, 2);

    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["memory_size"], 2);
    assert_eq!(value["tools"][0]["name"], "simple");
}

#[test]
fn agent_with_custom_memory() {
    let mut memory = Memory::unbounded();
    memory.add(Message::system("You are helpful."));
    let agent = Agent::new("Seeded").with_memory(memory);
    assert_eq!(agent.history()[0].role(), Role::System);
}

#[test]
fn swap_responder_keeps_state() {
    let mut agent = Agent::new("Counter").with_tool(simple());
    agent.process("a");

    let mut agent = agent.swap_responder(Counting { turns: 0 });
    assert_eq!(agent.name(), "Counter");
    assert!(agent.has_tool("simple"));
    assert_eq!(agent.process("b"), "Counter #1 (3 in memory, 1 tools): b");
    assert_eq!(agent.responder().turns, 1);
    assert_eq!(agent.history().len(), 4);
}

#[test]
fn max_memory_keeps_seeded_messages() {
    let mut memory = Memory::unbounded();
    for i in 0..3 {
        memory.add(Message::system(format!("Seed {i}")));
    }

    let agent = Agent::new("Seeded")
        .with_memory(memory)
        .max_memory(NonZeroUsize::new(2).unwrap());
    let history = agent.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content(), "Seed 1");
    assert_eq!(history[1].content(), "Seed 2");
}
