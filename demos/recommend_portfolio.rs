//! Portfolio Recommendation Example
//!
//! This example walks one conversation through the dispatcher:
//! - A turn with an invalid age that gets re-elicited
//! - A turn with valid slots that is delegated back to the platform
//! - The fulfillment turn that returns the recommended allocation

use robo_advisor_dialog::IntentDispatcher;
use serde_json::{Value, json};

fn turn(source: &str, slots: Value) -> Value {
    json!({
        "messageVersion": "1.0",
        "invocationSource": source,
        "userId": "demo-user",
        "sessionAttributes": {},
        "outputDialogMode": "Text",
        "currentIntent": {
            "name": "recommendPortfolio",
            "slots": slots,
            "confirmationStatus": "None"
        }
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Robo Advisor Dialog Example ===\n");

    let dispatcher = IntentDispatcher::default();

    // Step 1: age outside the accepted range
    println!("1. User says they are 70...");
    let response = dispatcher.handle_event(turn(
        "DialogCodeHook",
        json!({ "firstName": "Ada", "age": "70", "investmentAmount": null, "riskLevel": null }),
    ))?;
    println!("{}\n", serde_json::to_string_pretty(&response)?);

    // Step 2: corrected age and a valid amount
    println!("2. User corrects age and offers $10000...");
    let response = dispatcher.handle_event(turn(
        "DialogCodeHook",
        json!({ "firstName": "Ada", "age": "30", "investmentAmount": "10000", "riskLevel": null }),
    ))?;
    println!("{}\n", serde_json::to_string_pretty(&response)?);

    // Step 3: fulfillment
    println!("3. User picks a medium risk level...");
    let response = dispatcher.handle_event(turn(
        "FulfillmentCodeHook",
        json!({
            "firstName": "Ada",
            "age": "30",
            "investmentAmount": "10000",
            "riskLevel": "Medium"
        }),
    ))?;
    println!("{}\n", serde_json::to_string_pretty(&response)?);

    // Step 4: an intent this bot does not serve
    println!("4. Platform routes an unknown intent...");
    let mut event = turn("DialogCodeHook", json!({}));
    event["currentIntent"]["name"] = json!("orderPizza");
    match dispatcher.handle_event(event) {
        Ok(_) => println!("   unexpectedly handled"),
        Err(e) => println!("   rejected: {e}"),
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
