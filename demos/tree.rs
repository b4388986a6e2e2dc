use std::collections::BTreeMap;

use clap::Parser;
use color_eyre::eyre::eyre;

use logic_tree::node::Node;
use logic_tree::print::TreeStyle;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Truth assignment, e.g. `a=true,b=false`.
    #[arg(long, value_name = "ASSIGNMENTS", default_value = "a=true,b=false")]
    model: String,

    /// Print every child of n-ary nodes.
    #[clap(long)]
    all_children: bool,
}

fn parse_model(s: &str) -> color_eyre::Result<BTreeMap<String, bool>> {
    let mut model = BTreeMap::new();
    for pair in s.split(',').filter(|p| !p.is_empty()) {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre!("expected NAME=VALUE, got '{}'", pair))?;
        model.insert(name.trim().to_string(), value.trim().parse()?);
    }
    Ok(model)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let model = parse_model(&args.model)?;
    println!("model = {:?}", model);

    let style = TreeStyle {
        all_children: args.all_children,
        ..TreeStyle::default()
    };

    let a = Node::atom("a");
    let b = Node::atom("b");
    let not_and = !(a.clone() & b.clone());
    let not_or = !(a.clone() | b.clone());
    let sentences = [
        ("~(a & b)", not_and.clone()),
        ("~(a v b)", not_or.clone()),
        ("~(a & b) v ~(a v b)", not_and | not_or),
        ("a & b & ~a", Node::and([a.clone(), b, !a])),
    ];

    for (name, f) in &sentences {
        println!();
        println!("{}:", name);
        print!("{}", f.to_tree_string_with_style(&style)?);
        match f.eval(&model) {
            Ok(value) => println!("=> {}", value),
            Err(e) => println!("=> error: {}", e),
        }
    }

    Ok(())
}
