use super::{Link, Opcode};
use crate::error;
use crate::lang::token::{fits_operand, is_label, parse_literal};
use crate::lang::{lex, Error, Word};

type Result<T> = std::result::Result<T, Error>;

/// Assemble source lines into a memory image of exactly `capacity` cells.
pub fn assemble<S: AsRef<str>>(lines: &[S], capacity: usize) -> Result<Vec<Word>> {
    let tokens = lex(lines);
    let tokens = extract_labels(tokens)?;
    encode(&tokens, capacity)
}

/// Pass 1. Drops label definitions while recording their addresses,
/// canonicalizes operand literals, then resolves label references.
///
/// A `:` token in an instruction position is a definition; in an operand
/// slot it is a reference. Undefined references pass through untouched.
pub fn extract_labels(tokens: Vec<String>) -> Result<Vec<String>> {
    let mut link = Link::new();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        if is_label(&token) {
            link.define(&token, out.len())?;
            continue;
        }
        let width = Opcode::from_mnemonic(&token).map_or(0, |op| op.width());
        out.push(token);
        for _ in 1..width {
            let operand = match tokens.next() {
                Some(operand) => operand,
                None => break,
            };
            if is_label(&operand) {
                out.push(operand);
            } else {
                out.push(canonical_operand(&operand, out.len())?);
            }
        }
    }
    Ok(link.link(out))
}

fn canonical_operand(operand: &str, addr: usize) -> Result<String> {
    match parse_literal(operand) {
        Some(value) if fits_operand(value) => Ok(value.to_string()),
        Some(_) => Err(error!(SubrangeViolation, addr; operand)),
        None => Err(error!(InvalidLiteral, addr; operand)),
    }
}

/// Pass 2. Every token becomes one memory cell.
pub fn encode(tokens: &[String], capacity: usize) -> Result<Vec<Word>> {
    let mut image = tokens
        .iter()
        .enumerate()
        .map(|(addr, token)| encode_token(token, addr))
        .collect::<Result<Vec<Word>>>()?;
    if image.len() > capacity {
        return Err(error!(OutOfMemory, capacity));
    }
    image.resize(capacity, 0);
    Ok(image)
}

fn encode_token(token: &str, addr: usize) -> Result<Word> {
    if let Some(op) = Opcode::from_mnemonic(token) {
        return Ok(op.code());
    }
    match parse_literal(token) {
        Some(value) => Ok(value),
        None if is_label(token) => Err(error!(UndeclaredLabel, addr; token)),
        None => Err(error!(InvalidLiteral, addr; token)),
    }
}
