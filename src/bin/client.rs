use std::env;
use std::io::{self, BufRead, Write};
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

/// Staff client for the order desk
#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(about = "client cli used by restaurant staffs to take orders", version, long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// list menu items
    Menu,
    /// in-progress order ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// show current lines and total
    Show,
    #[command(arg_required_else_help = true)]
    Add {
        #[arg(long, help = "Id of menu item to add.", value_name = "MENU_ITEM_ID")]
        item: i32,
        #[arg(short = 'q', long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=100))]
        quantity: i64,
    },
    Submit {
        #[arg(short = 't', long, help = "Table number, prompted for when omitted.")]
        table: Option<String>,
    },
    Cancel {
        #[arg(short = 'y', long, help = "Skip the confirmation prompt.")]
        yes: bool,
    },
}

const DEFAULT_HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct MenuItemView {
    id: i32,
    name: String,
    price: String,
}

#[derive(Debug, Deserialize)]
struct MenuResponse {
    items: Vec<MenuItemView>,
}

#[derive(Debug, Deserialize)]
struct OrderLineView {
    item_name: String,
    quantity: i32,
    unit_price: String,
    line_total: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    lines: Vec<OrderLineView>,
    running_total: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    order_id: i64,
    table_number: i32,
    total_amount: String,
    line_count: usize,
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{} ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn print_order(order: &OrderResponse) {
    for line in &order.lines {
        println!("{:<24} {:>4} x {:>8} = {:>9}", line.item_name, line.quantity, line.unit_price, line.line_total);
    }
    println!("Total: {}", order.running_total);
}

async fn report_failure(res: Response) -> Result<(), anyhow::Error> {
    match res.status() {
        StatusCode::BAD_REQUEST => println!("{}", res.text().await?),
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
            println!("{}, the order is kept as is", res.text().await?);
        },
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = env::var("ORDER_DESK_HOST").unwrap_or(DEFAULT_HOST.to_string());
    let client = Client::new();

    match args.command {
        Commands::Menu => {
            let res = client.get(format!("{}/v1/menu", host)).send().await?;
            if res.status() != StatusCode::OK {
                return report_failure(res).await;
            }
            for item in res.json::<MenuResponse>().await?.items {
                println!("{:>4}  {:<24} {:>8}", item.id, item.name, item.price);
            }
        },
        Commands::Order(order) => {
            let res = match order.command {
                OrderCmds::Show => client.get(format!("{}/v1/order", host)).send().await?,
                OrderCmds::Add { item, quantity } => {
                    client
                        .post(format!("{}/v1/order/lines", host))
                        .json(&serde_json::json!({
                            "menu_item_id": item,
                            "quantity": quantity,
                        }))
                        .send()
                        .await?
                },
                OrderCmds::Submit { table } => {
                    let current = client.get(format!("{}/v1/order", host)).send().await?;
                    if current.status() != StatusCode::OK {
                        return report_failure(current).await;
                    }
                    if current.json::<OrderResponse>().await?.lines.is_empty() {
                        println!("Add at least one item before submitting.");
                        return Ok(());
                    }
                    let input = match table {
                        Some(table) => table,
                        None => match prompt("Enter table number: [1]")? {
                            answer if answer.is_empty() => "1".to_string(),
                            answer => answer,
                        },
                    };
                    let table_number = match input.trim().parse::<i64>() {
                        Ok(n) if n > 0 => n,
                        _ => {
                            println!("Invalid table number.");
                            return Ok(());
                        }
                    };
                    let res = client
                        .post(format!("{}/v1/order", host))
                        .json(&serde_json::json!({ "table_number": table_number }))
                        .send()
                        .await?;
                    if res.status() != StatusCode::OK {
                        return report_failure(res).await;
                    }
                    let submitted = res.json::<SubmitResponse>().await?;
                    println!(
                        "Order submitted successfully! order id = {}, table = {}, {} lines, total {}",
                        submitted.order_id, submitted.table_number, submitted.line_count, submitted.total_amount,
                    );
                    return Ok(());
                },
                OrderCmds::Cancel { yes } => {
                    if !yes {
                        let answer = prompt("Are you sure you want to clear the current order? [y/N]")?;
                        if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
                            println!("order kept");
                            return Ok(());
                        }
                    }
                    client.delete(format!("{}/v1/order", host)).send().await?
                },
            };
            if res.status() != StatusCode::OK {
                return report_failure(res).await;
            }
            print_order(&res.json::<OrderResponse>().await?);
        },
    };
    Ok(())
}
