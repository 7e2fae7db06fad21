//! Scripted demonstrations of the framework.

use crate::display;
use agentframe::{Agent, Params, Responder};
use agents::{assistant_agent, conversational_agent, simple_agent};
use anyhow::Result;
use serde_json::{Value, json};
use std::io::Write;
use tools::{CalculatorTool, SearchTool, TextProcessorTool};

const RULE: &str = "============================================================";

/// Run every demonstration in order.
pub fn run_all(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, " agentframe demonstration")?;
    writeln!(out, " Agents with memory and tools")?;
    writeln!(out, "{RULE}")?;

    basic(out)?;
    with_tools(out)?;
    simple(out)?;
    assistant(out)?;
    conversational(out)?;
    search(out)?;

    separator(out, "Demo Complete")?;
    writeln!(out, "All demonstrations completed successfully!")?;
    Ok(())
}

/// The short quick start walkthrough.
pub fn quickstart(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "agentframe quick start")?;
    writeln!(out, "{RULE}\n")?;

    writeln!(out, "1. Creating an agent...")?;
    let mut agent = Agent::new("QuickBot").with_description("A quick start example agent");
    writeln!(out, "   Created: {agent}\n")?;

    writeln!(out, "2. Adding tools...")?;
    agent.add_tool(CalculatorTool);
    agent.add_tool(SearchTool::default());
    writeln!(out, "   Tools: {}\n", agent.tools().join(", "))?;

    writeln!(out, "3. Processing a message...")?;
    let response = agent.process("Hello, QuickBot!");
    writeln!(out, "   User: Hello, QuickBot!")?;
    writeln!(out, "   Agent: {response}\n")?;

    writeln!(out, "4. Using the calculator tool...")?;
    let result = agent.use_tool("calculator", calc("add", 15, 27))?;
    writeln!(out, "   15 + 27 = {}\n", display(&result))?;

    writeln!(out, "5. Using the search tool...")?;
    let result = agent.use_tool("search", params([("query", json!("python"))]))?;
    writeln!(out, "   Query: 'python'")?;
    writeln!(out, "   Result: {}\n", display(&result))?;

    writeln!(out, "6. Viewing conversation history...")?;
    let history = agent.history();
    writeln!(out, "   Total messages: {}", history.len())?;
    for (i, message) in history.iter().enumerate() {
        writeln!(out, "   {}. {message}", i + 1)?;
    }

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "Quick start complete!\n")?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  - Run 'agentframe demo' for more examples")?;
    writeln!(out, "  - Run 'agentframe chat' to talk to an agent")?;
    writeln!(out, "  - Implement `Tool` or `Responder` yourself")?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn basic(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 1: Basic Agent")?;

    let mut agent = Agent::new("BasicBot").with_description("A basic agent");
    writeln!(out, "Created agent: {agent}")?;
    let info = serde_json::to_string(&agent.info())?;
    writeln!(out, "Agent info: {info}\n")?;

    exchange(out, &mut agent, "Hello, agent!")?;

    let history = agent.history();
    writeln!(out, "Conversation history ({} messages):", history.len())?;
    for message in &history {
        writeln!(out, "  {message}")?;
    }
    Ok(())
}

fn with_tools(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 2: Agent with Tools")?;

    let mut agent = Agent::new("ToolBot")
        .with_description("An agent with tools")
        .with_tool(CalculatorTool)
        .with_tool(TextProcessorTool);
    writeln!(out, "Agent tools: {:?}\n", agent.tools())?;

    let result = agent.use_tool("calculator", calc("add", 10, 5))?;
    writeln!(out, "Calculator: 10 + 5 = {}\n", display(&result))?;

    let result = agent.use_tool("calculator", calc("multiply", 7, 3))?;
    writeln!(out, "Calculator: 7 * 3 = {}\n", display(&result))?;

    let result = agent.use_tool("text_processor", text("uppercase", "hello world"))?;
    writeln!(out, "Text processor (uppercase): {}\n", display(&result))?;

    let words = text("word_count", "The quick brown fox");
    let count = display(&agent.use_tool("text_processor", words)?);
    writeln!(out, "Text processor (word count): {count} words\n")?;
    Ok(())
}

fn simple(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 3: Simple Agent")?;

    let mut agent = simple_agent();
    writeln!(out, "Agent: {}", agent.name())?;
    writeln!(out, "Description: {}\n", agent.description())?;

    exchange(out, &mut agent, "I need help with something")
}

fn assistant(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 4: Assistant Agent")?;

    let mut agent = assistant_agent()
        .with_tool(CalculatorTool)
        .with_tool(SearchTool::default());
    writeln!(out, "Agent: {}", agent.name())?;
    writeln!(out, "Available tools: {:?}\n", agent.tools())?;

    for query in [
        "Can you help me calculate something?",
        "I need to search for information",
        "What can you do?",
    ] {
        exchange(out, &mut agent, query)?;
    }
    Ok(())
}

fn conversational(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 5: Conversational Agent")?;

    let mut agent = conversational_agent();
    writeln!(out, "Agent: {}", agent.name())?;
    if let Some(capacity) = agent.memory().capacity() {
        writeln!(out, "Max memory: {capacity} messages\n")?;
    }

    for message in ["Hello!", "How are you?", "Tell me about yourself", "Goodbye!"] {
        exchange(out, &mut agent, message)?;
    }

    writeln!(out, "Total messages in history: {}", agent.history().len())?;
    Ok(())
}

fn search(out: &mut impl Write) -> Result<()> {
    separator(out, "Demo 6: Search Tool")?;

    let mut agent = Agent::new("SearchBot").with_tool(SearchTool::default());
    for query in ["python", "agent", "framework", "unknown topic"] {
        let result = agent.use_tool("search", params([("query", json!(query))]))?;
        writeln!(out, "Query: {query}")?;
        writeln!(out, "Result: {}\n", display(&result))?;
    }
    Ok(())
}

fn separator(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, " {title}")?;
    writeln!(out, "{RULE}\n")?;
    Ok(())
}

fn exchange<R: Responder>(out: &mut impl Write, agent: &mut Agent<R>, input: &str) -> Result<()> {
    let response = agent.process(input);
    writeln!(out, "User: {input}")?;
    writeln!(out, "Agent: {response}\n")?;
    Ok(())
}

fn params<const N: usize>(pairs: [(&str, Value); N]) -> Params {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn calc(operation: &str, a: i64, b: i64) -> Params {
    params([
        ("operation", json!(operation)),
        ("a", json!(a)),
        ("b", json!(b)),
    ])
}

fn text(operation: &str, text: &str) -> Params {
    params([("operation", json!(operation)), ("text", json!(text))])
}
