//! # interactive 命令实现
//!
//! 行式交互表单。会话持有一个 `BmiForm`，字段修改与计算都是显式命令：
//!
//! ```text
//! height 170      设置身高 (cm)
//! weight 65       设置体重 (kg)
//! age 30          设置年龄
//! gender female   设置性别
//! activity light  设置活动水平
//! calc            计算（输入无效时保留上一次结果）
//! show            回显字段和当前结果
//! reset           清空表单
//! help / quit
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的 InteractiveArgs
//! - 使用 `calculator/form.rs`
//! - 使用 `console` 读取终端输入

use crate::calculator::BmiForm;
use crate::cli::calc::InteractiveArgs;
use crate::error::{FitcalcError, Result};
use crate::models::{ActivityLevel, Gender};
use crate::utils::output;

use console::{style, Term};
use std::io::BufRead;

/// 会话命令
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    Height(String),
    Weight(String),
    Age(String),
    Gender(Gender),
    Activity(ActivityLevel),
    Calc,
    Show,
    Reset,
    Help,
    Quit,
}

/// 解析一行输入；空行返回 `Ok(None)`
pub fn parse_command(line: &str) -> std::result::Result<Option<FormCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_lowercase().as_str() {
        "height" | "h" => FormCommand::Height(rest.to_string()),
        "weight" | "w" => FormCommand::Weight(rest.to_string()),
        "age" => FormCommand::Age(rest.to_string()),
        "gender" => FormCommand::Gender(rest.parse()?),
        "activity" => FormCommand::Activity(rest.parse()?),
        "calc" | "calculate" | "c" => FormCommand::Calc,
        "show" => FormCommand::Show,
        "reset" => FormCommand::Reset,
        "help" | "?" => FormCommand::Help,
        "quit" | "exit" | "q" => FormCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help' for usage", other)),
    };

    Ok(Some(cmd))
}

/// 命令执行后的会话动作
#[derive(Debug, PartialEq)]
enum Outcome {
    Continue,
    Quit,
}

/// 将命令应用到表单并渲染
fn apply(form: &mut BmiForm, cmd: FormCommand) -> Outcome {
    match cmd {
        FormCommand::Height(v) => form.set_height(v),
        FormCommand::Weight(v) => form.set_weight(v),
        FormCommand::Age(v) => form.set_age(v),
        FormCommand::Gender(g) => form.set_gender(g),
        FormCommand::Activity(a) => form.set_activity(a),
        FormCommand::Calc => {
            if !form.calculate() {
                output::print_skip("Invalid height or weight; result unchanged");
            }
            output::print_bmi_result(form.result());
        }
        FormCommand::Show => {
            output::print_form_fields(form.input());
            output::print_bmi_result(form.result());
        }
        FormCommand::Reset => {
            form.reset();
            output::print_info("Form cleared");
        }
        FormCommand::Help => print_help(),
        FormCommand::Quit => return Outcome::Quit,
    }
    Outcome::Continue
}

fn print_help() {
    println!("  height <cm>       set height in centimeters");
    println!("  weight <kg>       set weight in kilograms");
    println!("  age <years>       set age");
    println!("  gender <g>        {}", Gender::VARIANTS.join(" | "));
    println!("  activity <a>      {}", ActivityLevel::VARIANTS.join(" | "));
    println!("  calc              calculate BMI");
    println!("  show              show fields and current result");
    println!("  reset             clear the form");
    println!("  quit              leave the session");
}

/// 执行 interactive 命令
pub fn execute(args: InteractiveArgs) -> Result<()> {
    output::print_header("BMI Calculator (interactive)");
    output::print_info("Type 'help' for commands, 'quit' to leave");

    let mut form = BmiForm::new();
    if let Some(height) = args.height {
        form.set_height(height);
    }
    if let Some(weight) = args.weight {
        form.set_weight(weight);
    }

    let term = Term::stdout();
    let attended = term.is_term();
    // 终端模式下由 console 读取，不能提前锁住 stdin
    let mut piped = if attended {
        None
    } else {
        Some(std::io::stdin().lock().lines())
    };

    loop {
        let line = match piped.as_mut() {
            // 非终端输入（管道/重定向），EOF 时结束会话
            Some(lines) => match lines.next() {
                Some(line) => line.map_err(|e| FitcalcError::Other(e.to_string()))?,
                None => break,
            },
            None => {
                term.write_str(&format!("{} ", style("fitcalc>").cyan().bold()))
                    .map_err(|e| FitcalcError::Other(e.to_string()))?;
                term.read_line()
                    .map_err(|e| FitcalcError::Other(e.to_string()))?
            }
        };

        match parse_command(&line) {
            Ok(Some(cmd)) => {
                if apply(&mut form, cmd) == Outcome::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(msg) => output::print_warning(&msg),
        }
    }

    output::print_done("Session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_commands() {
        assert_eq!(
            parse_command("height 170").unwrap(),
            Some(FormCommand::Height("170".to_string()))
        );
        assert_eq!(
            parse_command("  W   65.5 ").unwrap(),
            Some(FormCommand::Weight("65.5".to_string()))
        );
        assert_eq!(
            parse_command("gender female").unwrap(),
            Some(FormCommand::Gender(Gender::Female))
        );
        assert_eq!(
            parse_command("activity very-active").unwrap(),
            Some(FormCommand::Activity(ActivityLevel::VeryActive))
        );
    }

    #[test]
    fn test_parse_clear_field() {
        // 不带值的 height 清空字段
        assert_eq!(
            parse_command("height").unwrap(),
            Some(FormCommand::Height(String::new()))
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("calc").unwrap(), Some(FormCommand::Calc));
        assert_eq!(parse_command("EXIT").unwrap(), Some(FormCommand::Quit));
        assert_eq!(parse_command("").unwrap(), None);
        assert!(parse_command("jump 3").is_err());
        assert!(parse_command("gender robot").is_err());
    }

    #[test]
    fn test_session_keeps_result_on_invalid_input() {
        let mut form = BmiForm::new();
        for line in ["height 170", "weight 65", "calc", "height", "calc"] {
            let cmd = parse_command(line).unwrap().unwrap();
            assert_eq!(apply(&mut form, cmd), Outcome::Continue);
        }
        assert_eq!(form.result().map(|r| r.value()), Some(22.5));
        assert_eq!(form.input().height_cm, "");
    }

    #[test]
    fn test_session_reset_and_quit() {
        let mut form = BmiForm::new();
        for line in ["height 160", "weight 45", "calc", "reset"] {
            apply(&mut form, parse_command(line).unwrap().unwrap());
        }
        assert!(form.result().is_none());
        assert_eq!(apply(&mut form, FormCommand::Quit), Outcome::Quit);
    }
}
