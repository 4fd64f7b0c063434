// File: src/shell.rs
use crate::core::engine::TranslatorEngine;
use crate::core::types::Direction;
use crate::error::Result;
use crate::learning::NewWord;
use crossterm::style::Stylize;
use log::debug;
use std::io::{BufRead, Write};

/// Runs the numbered menu until the user picks `0` or input ends.
///
/// Generic over the streams so scripted sessions can drive it.
pub fn run<R: BufRead, W: Write>(engine: &mut TranslatorEngine, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        print_menu(out)?;
        let option = match read_line(input)? {
            Some(line) => line.trim().to_string(),
            None => {
                debug!("Input closed, leaving menu");
                "0".to_string()
            }
        };

        match option.as_str() {
            "1" => translate_phrase(engine, input, out)?,
            "2" => add_word(engine, input, out)?,
            "0" => {
                writeln!(out, "Vuelve pronto")?;
                return Ok(());
            }
            _ => writeln!(out, "Opción inválida. Intente nuevamente.")?,
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", "==================== MENÚ ====================".bold().cyan())?;
    writeln!(out, "1. Traducir una frase")?;
    writeln!(out, "2. Agregar palabras al diccionario")?;
    writeln!(out, "0. Salir\n")?;
    write!(out, "Seleccione una opción: ")?;
    out.flush()?;
    Ok(())
}

fn print_directions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "1. Inglés -> Español")?;
    writeln!(out, "2. Español -> Inglés")?;
    write!(out, "Opción: ")?;
    out.flush()?;
    Ok(())
}

fn translate_phrase<R: BufRead, W: Write>(engine: &TranslatorEngine, input: &mut R, out: &mut W) -> Result<()> {
    write!(out, "\nIngrese la frase a traducir:\n> ")?;
    out.flush()?;
    let phrase = read_line(input)?.unwrap_or_default();

    writeln!(out, "\nSeleccione la dirección de traducción:")?;
    print_directions(out)?;
    let selector = read_line(input)?.unwrap_or_default();

    let Some(direction) = Direction::from_selector(&selector) else {
        writeln!(out, "Dirección inválida. Se cancela la traducción.")?;
        return Ok(());
    };

    let result = engine.translate(&phrase, direction);
    writeln!(out, "\n{}", "Traducción parcial (solo palabras registradas traducidas):".bold())?;
    writeln!(out, "{}", result)?;
    Ok(())
}

fn add_word<R: BufRead, W: Write>(engine: &mut TranslatorEngine, input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "\nAgregar palabra al diccionario.")?;
    writeln!(out, "Indique la dirección del par:")?;
    print_directions(out)?;
    let selector = read_line(input)?.unwrap_or_default();

    let Some(direction) = Direction::from_selector(&selector) else {
        writeln!(out, "Opción inválida. Cancelado.")?;
        return Ok(());
    };

    let (word_prompt, translation_prompt) = match direction {
        Direction::EnglishToSpanish => (
            "Palabra en inglés: ",
            "Traducción al español (puede incluir variantes separadas por '/'): ",
        ),
        Direction::SpanishToEnglish => (
            "Palabra en español: ",
            "Traducción al inglés (puede incluir variantes separadas por '/'): ",
        ),
    };

    write!(out, "{}", word_prompt)?;
    out.flush()?;
    let word = read_line(input)?.unwrap_or_default();
    write!(out, "{}", translation_prompt)?;
    out.flush()?;
    let translation = read_line(input)?.unwrap_or_default();

    let new_word = NewWord::new(direction, &word, &translation);
    if new_word.learn(engine) {
        writeln!(out, "Añadido: {} -> {}", new_word.word, new_word.translation)?;
    } else {
        writeln!(out, "Entrada vacía. Cancelado.")?;
    }
    Ok(())
}

/// One line without its terminator, or `None` once input is exhausted.
/// Bytes that are not UTF-8 come through as U+FFFD.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut raw = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&raw).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_terminators() {
        let mut input = Cursor::new("uno\r\ndos\n tres ");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("uno"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("dos"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(" tres "));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn read_line_replaces_invalid_utf8() {
        let mut input = Cursor::new(b"a\xF1o\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("a\u{FFFD}o"));
    }
}
