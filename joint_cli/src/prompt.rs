//! Interactive input gathering.
//!
//! Empty or unparseable answers fall back to the shown default.

use std::io::{self, BufRead, Write};

use joint_core::JointInput;

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Option<String> {
    write!(output, "{}", prompt).ok()?;
    output.flush().ok()?;

    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    let answer = line.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

pub fn prompt_string<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str, default: &str) -> String {
    read_answer(input, output, &format!("{} [{}]: ", prompt, default)).unwrap_or_else(|| default.to_string())
}

pub fn prompt_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str, default: f64) -> f64 {
    read_answer(input, output, &format!("{} [{}]: ", prompt, default))
        .and_then(|a| a.parse().ok())
        .unwrap_or(default)
}

pub fn prompt_u32<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str, default: u32) -> u32 {
    read_answer(input, output, &format!("{} [{}]: ", prompt, default))
        .and_then(|a| a.parse().ok())
        .unwrap_or(default)
}

/// Ask for every field of one joint, using `defaults` for blank answers.
pub fn prompt_joint<R: BufRead, W: Write>(input: &mut R, output: &mut W, defaults: &JointInput) -> io::Result<JointInput> {
    writeln!(output, "{}", defaults.label)?;
    Ok(JointInput {
        label: defaults.label.clone(),
        size: prompt_string(input, output, "  Bolt size", &defaults.size),
        grade: prompt_string(input, output, "  Material grade", &defaults.grade),
        quantity: prompt_u32(input, output, "  Number of bolts", defaults.quantity),
        torque_ftlb: prompt_f64(input, output, "  Torque (ft-lb)", defaults.torque_ftlb),
        k_factor: prompt_f64(input, output, "  K-factor", defaults.k_factor),
    })
}

/// Defaults offered for the two joints.
pub fn default_joints() -> (JointInput, JointInput) {
    (
        JointInput::new("3/4-10", "A193 B7", 8, 80.0, 0.17).with_label("Joint 1"),
        JointInput::new("5/8-11", "A307 Gr. B", 4, 50.0, 0.17).with_label("Joint 2"),
    )
}
