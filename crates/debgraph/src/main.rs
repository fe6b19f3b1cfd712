use console::style;

#[tokio::main]
async fn main() {
    if let Err(e) = debgraph_lib::main().await {
        eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
        std::process::exit(1);
    }
}
