//! Tests for the bundled tools.

use agentframe::{Agent, Error, Params, Role, Tool};
use agentframe_tools::{CalculatorTool, SearchTool, TextProcessorTool};
use serde_json::{Value, json};

fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

fn calc(operation: &str, a: Value, b: Value) -> agentframe::Result<Value> {
    CalculatorTool.execute(&params(json!({ "operation": operation, "a": a, "b": b })))
}

#[test]
fn calculator_integer_arithmetic() {
    assert_eq!(calc("add", json!(10), json!(5)).unwrap(), json!(15));
    assert_eq!(calc("subtract", json!(10), json!(5)).unwrap(), json!(5));
    assert_eq!(calc("multiply", json!(7), json!(3)).unwrap(), json!(21));
}

#[test]
fn calculator_float_arithmetic() {
    assert_eq!(calc("add", json!(1.5), json!(2)).unwrap(), json!(3.5));
    assert_eq!(calc("divide", json!(10), json!(4)).unwrap(), json!(2.5));
    assert_eq!(calc("divide", json!(10), json!(5)).unwrap(), json!(2.0));
}

#[test]
fn calculator_overflow_falls_back_to_float() {
    let result = calc("multiply", json!(i64::MAX), json!(2)).unwrap();
    assert!(result.is_f64());
}

#[test]
fn calculator_divide_by_zero() {
    let err = calc("divide", json!(10), json!(0)).unwrap_err();
    assert_eq!(err, Error::invalid("Cannot divide by zero"));
}

#[test]
fn calculator_unsupported_operation() {
    let err = calc("modulo", json!(10), json!(3)).unwrap_err();
    assert_eq!(err, Error::invalid("Unsupported operation: modulo"));
}

#[test]
fn calculator_missing_operand() {
    let err = CalculatorTool
        .execute(&params(json!({ "operation": "add", "a": 1 })))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn calculator_info() {
    let info = CalculatorTool.info();
    assert_eq!(info.name, "calculator");
    assert!(info.description.contains("arithmetic"));
}

fn text(operation: &str, text: &str) -> agentframe::Result<Value> {
    TextProcessorTool.execute(&params(json!({ "operation": operation, "text": text })))
}

#[test]
fn text_operations() {
    assert_eq!(text("uppercase", "hello world").unwrap(), "HELLO WORLD");
    assert_eq!(text("lowercase", "HELLO World").unwrap(), "hello world");
    assert_eq!(text("reverse", "hello").unwrap(), "olleh");
    assert_eq!(text("word_count", "The quick brown fox").unwrap(), json!(4));
    assert_eq!(text("word_count", "   ").unwrap(), json!(0));
}

#[test]
fn text_unsupported_operation() {
    let err = text("capitalize", "hello").unwrap_err();
    assert_eq!(err, Error::invalid("Unsupported operation: capitalize"));
}

fn search(query: &str) -> Value {
    SearchTool::default()
        .execute(&params(json!({ "query": query })))
        .unwrap()
}

#[test]
fn search_known_topics() {
    assert_eq!(
        search("python"),
        "Python is a high-level programming language."
    );
    assert_eq!(
        search("What is an AGENT?"),
        "An agent is an autonomous entity that can perceive and act."
    );
    assert_eq!(
        search("framework"),
        "A framework is a reusable software structure."
    );
}

#[test]
fn search_first_key_wins() {
    assert_eq!(
        search("python agent framework"),
        "Python is a high-level programming language."
    );
}

#[test]
fn search_unknown_topic() {
    assert_eq!(
        search("unknown topic"),
        "No information found for: unknown topic"
    );
}

#[test]
fn search_custom_entries() {
    let tool = SearchTool::with_entries([("Rust".to_owned(), "A systems language.".to_owned())]);
    assert_eq!(tool.lookup("tell me about rust"), "A systems language.");
    assert_eq!(tool.lookup("python"), "No information found for: python");
}

#[test]
fn bundled_tools_registered_on_agent() {
    let mut agent = Agent::new("ToolBot");
    for tool in agentframe_tools::all() {
        agent.add_boxed(tool);
    }
    assert_eq!(agent.tools(), ["calculator", "text_processor", "search"]);
    assert!(agentframe_tools::by_name("search").is_some());
    assert!(agentframe_tools::by_name("weather").is_none());

    let sum = params(json!({ "operation": "add", "a": 15, "b": 27 }));
    let result = agent.use_tool("calculator", sum).unwrap();
    assert_eq!(result, json!(42));

    let divide = params(json!({ "operation": "divide", "a": 1, "b": 0 }));
    let err = agent.use_tool("calculator", divide).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let history = agent.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role(), Role::Tool);
    assert_eq!(history[0].content(), "Used tool 'calculator': 42");
    assert_eq!(history[0].metadata()["tool"], "calculator");
    assert_eq!(history[0].metadata()["result"], 42);
}
