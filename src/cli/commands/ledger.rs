use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::chart::{chart_width, render_bar_chart, BarChart, ChartStyle};
use crate::currency::format_currency_value;
use crate::ledger::RemoveOutcome;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("deposit", "Add to income", "deposit [amount]", cmd_deposit)
            .with_menu_key("1"),
        CommandEntry::new("expense", "Add expense", "expense [amount]", cmd_expense)
            .with_menu_key("2"),
        CommandEntry::new("remove", "Remove expense", "remove [amount]", cmd_remove)
            .with_menu_key("3"),
        CommandEntry::new("view", "View budget", "view", cmd_view).with_menu_key("4"),
        CommandEntry::new(
            "history",
            "View transaction history",
            "history",
            cmd_history,
        )
        .with_menu_key("5"),
        CommandEntry::new("chart", "Visualize budget", "chart", cmd_chart).with_menu_key("6"),
        CommandEntry::new("name", "Set owner name", "name [owner]", cmd_name).with_menu_key("7"),
    ]
}

fn cmd_deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = context.amount_arg(args, "Enter income amount")?;
    context.ledger.record_income(amount);
    io::print_success(format!(
        "Added income: {}",
        format_currency_value(amount, &context.format_options())
    ));
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = context.amount_arg(args, "Enter expense amount")?;
    context.ledger.record_expense(amount);
    io::print_success(format!(
        "Added expense: {}",
        format_currency_value(amount, &context.format_options())
    ));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let amount = context.amount_arg(args, "Enter expense amount to remove")?;
    match context.ledger.remove_expense(amount) {
        RemoveOutcome::Removed => io::print_success(format!(
            "Removed expense: {}",
            format_currency_value(amount, &context.format_options())
        )),
        RemoveOutcome::NothingToRemove => io::print_warning("Nothing to remove."),
    }
    Ok(())
}

fn cmd_view(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section(budget_title(context));
    io::print_info(context.ledger.summary().render(&context.format_options()));
    Ok(())
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Transaction history");
    let history = context.ledger.all_transactions();
    io::print_info(history.render(&context.format_options()));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let options = context.format_options();
    let chart = BarChart::budget(
        context.ledger.total_income(),
        context.ledger.total_expenses(),
        &options,
    );
    let style = ChartStyle {
        width: chart_width(context.config.chart_width),
        color: !context.config.plain_mode,
        format: options,
    };
    println!();
    io::print_info(render_bar_chart(&chart, &style));
    Ok(())
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if !args.is_empty() {
        args.join(" ")
    } else if context.can_prompt() {
        io::prompt_text(&context.theme, "Enter owner name")?
    } else {
        return Err(CommandError::InvalidArguments(
            "usage: name <owner>".into(),
        ));
    };
    context.ledger.set_owner_name(name.trim());
    io::print_success(format!("Owner set to `{}`.", context.ledger.owner_name()));
    Ok(())
}

fn budget_title(context: &ShellContext) -> String {
    match context.ledger.owner_name() {
        "" => "Budget".to_string(),
        owner => format!("Budget for {owner}"),
    }
}
