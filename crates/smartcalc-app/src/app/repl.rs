use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use smartcalc_llm_api::MathSolver;

use crate::app::setup::{solver_or_unavailable, voice_input};
use crate::config::AppConfig;
use crate::session::{SmartCalc, SolveOutcome};
use crate::voice::VoiceError;

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: AppConfig) -> Result<()> {
    println!("{}", "🧮 SmartCalc".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Assistant: {} ({})",
            config.client_config.backend.display_name(),
            config.client_config.effective_model()
        )
        .bright_black()
    );
    println!("{}", "Type keys like '2+3*4=', '/help' for commands, or 'exit' to quit\n".bright_black());

    let solver = solver_or_unavailable(&config);
    let mut calc = SmartCalc::new(config.locale, voice_input(&config));
    let mut rl = DefaultEditor::new()?;

    print_display(&calc);

    loop {
        if calc.drain_speech_events() > 0 && calc.panel().open {
            print_prompt(&calc);
        }

        let indicator = if calc.voice().is_listening() {
            "[🎤]".bright_red()
        } else if calc.panel().open {
            "[AI]".bright_magenta()
        } else {
            "[=]".bright_black()
        };
        let readline = rl.readline(&format!("{} ", indicator));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                rl.add_history_entry(line)?;

                if line.starts_with('/') {
                    if handle_command(line, &mut calc, solver.as_ref(), config.verbose).await == Flow::Quit {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    continue;
                }

                if calc.panel().open {
                    // Dictation may have ended while the line was typed
                    calc.drain_speech_events();
                    calc.set_prompt(line);
                    solve_and_show(&mut calc, solver.as_ref(), config.verbose).await;
                    continue;
                }

                match calc.press_str(line) {
                    Ok(()) => print_display(&calc),
                    Err(e) => eprintln!("{} {}", "Error:".bright_red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

async fn handle_command(line: &str, calc: &mut SmartCalc, solver: &dyn MathSolver, verbose: bool) -> Flow {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let locale = calc.locale();

    match (command, rest) {
        ("/quit", _) | ("/exit", _) => return Flow::Quit,
        ("/help", _) => print_help(),
        ("/history", "") => print_history(calc),
        ("/history", "clear") => {
            calc.clear_history();
            println!("{} {}", "🗑️".bright_green(), locale.history_empty());
        }
        ("/ai", prompt) => {
            calc.open_ai();
            println!("{}", locale.assistant_title().bright_magenta().bold());
            println!("{}", locale.assistant_intro().bright_black());
            if prompt.is_empty() {
                println!("{}", locale.prompt_hint().bright_black());
            } else {
                calc.set_prompt(prompt);
                solve_and_show(calc, solver, verbose).await;
            }
        }
        ("/examples", _) => {
            println!("{}", locale.examples_title().bright_cyan().bold());
            for (i, example) in locale.examples().iter().enumerate() {
                println!("  {}. {}", i + 1, example);
            }
        }
        ("/example", n) => match n.parse::<usize>() {
            Ok(n) if n >= 1 && calc.use_example(n - 1) => print_prompt(calc),
            _ => eprintln!(
                "{} Usage: /example <1-{}>",
                "❌".bright_red(),
                locale.examples().len()
            ),
        },
        ("/voice", _) => match calc.toggle_voice() {
            Ok(true) => {
                calc.open_ai();
                println!("{} {}", "🎤".bright_red(), locale.listening());
            }
            Ok(false) => println!("{} {}", "🎤".bright_black(), "stopped".bright_black()),
            Err(VoiceError::Unsupported) => println!("{} {}", "ℹ️".bright_blue(), locale.voice_unsupported().yellow()),
            Err(e) => eprintln!("{} {}", "❌".bright_red(), e),
        },
        ("/solve", _) => solve_and_show(calc, solver, verbose).await,
        ("/import", _) => {
            let preview = calc.import_preview();
            if calc.import_result() {
                if let Some(action) = preview {
                    println!("{} {}", "↳".bright_green(), action.describe());
                }
                print_display(calc);
            } else {
                println!("{}", locale.nothing_to_import().bright_black());
            }
        }
        ("/close", _) => {
            calc.close_ai();
            print_display(calc);
        }
        _ => eprintln!("{} Unknown command '{}'. Type /help for commands.", "❌".bright_red(), line),
    }
    Flow::Continue
}

async fn solve_and_show(calc: &mut SmartCalc, solver: &dyn MathSolver, verbose: bool) {
    if !calc.can_submit() {
        println!("{}", calc.locale().prompt_hint().bright_black());
        return;
    }

    println!("{}", calc.locale().loading().bright_black());
    let outcome = calc.solve(solver).await;
    if let SolveOutcome::Failed(e) = &outcome {
        if verbose {
            eprintln!("{}", format!("🔧 DEBUG: solve failed: {:#}", e).bright_black());
        }
    }
    print_answer(calc);
}

fn print_display(calc: &SmartCalc) {
    let pending = calc.pending();
    if !pending.is_empty() {
        println!("  {}", pending.bright_black());
    }
    println!("  {}", calc.display().bright_white().bold());
}

fn print_prompt(calc: &SmartCalc) {
    println!("{} {}", "✎".bright_magenta(), calc.panel().prompt);
}

fn print_answer(calc: &SmartCalc) {
    let Some(result) = &calc.panel().result else {
        return;
    };
    println!("\n{}", calc.locale().answer_title().bright_blue().bold());
    println!("{}\n", result);
    if let Some(action) = calc.import_preview() {
        println!(
            "{} {} {}",
            "/import".bright_green(),
            calc.locale().import_label().bright_black(),
            format!("({})", action.describe()).bright_black()
        );
    }
}

fn print_history(calc: &SmartCalc) {
    let locale = calc.locale();
    println!("{}", locale.history_title().bright_cyan().bold());
    if calc.history().is_empty() {
        println!("  {}", locale.history_empty().bright_black());
        return;
    }
    for item in calc.history().iter() {
        let time = chrono::DateTime::from_timestamp_millis(item.timestamp)
            .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {} {} = {}",
            time.bright_black(),
            item.expression,
            item.result.bright_white().bold()
        );
    }
}

fn print_help() {
    println!("{} Commands:", "🧮".bright_cyan());
    println!("  <keys>                  - Press keys: 0-9 . + - * / × ÷ = % n (sign) c (clear)");
    println!("  /history                - Show completed calculations");
    println!("  /history clear          - Clear the history");
    println!("  /ai [question]          - Open the AI assistant (and ask a question)");
    println!("  /examples               - List example questions");
    println!("  /example <n>            - Put example n into the prompt");
    println!("  /voice                  - Start or stop voice input");
    println!("  /solve                  - Ask the current prompt");
    println!("  /import                 - Copy the answer's number or expression into the calculator");
    println!("  /close                  - Close the AI assistant");
    println!("  /quit                   - Exit (also 'exit' or 'quit')");
    println!("{}", "While the assistant is open, any other line is sent as a question.".bright_black());
}
