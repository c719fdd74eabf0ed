use std::io::{self, BufRead, Write};

use phoru_core::translit::WriterTrace;
use phoru_core::{TranslateError, Transliterator};

#[derive(Debug, thiserror::Error)]
pub enum TranslateOpError {
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Translate `input` and write the result to `output` with no trailing
/// newline. With `trace`, every emitted character is also written there as
/// `<input> -> <output>`.
pub fn translate_to<R: BufRead, W: Write>(
    transliterator: &Transliterator,
    input: R,
    mut output: W,
    trace: Option<&mut dyn Write>,
) -> Result<(), TranslateOpError> {
    let text = match trace {
        Some(w) => transliterator.translate_traced(input, &mut WriterTrace::new(w))?,
        None => transliterator.translate(input)?,
    };
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// stdin → stdout, trace lines to stderr when `verbose`.
pub fn translate_stdin(transliterator: &Transliterator, verbose: bool) {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let trace: Option<&mut dyn Write> = if verbose { Some(&mut stderr) } else { None };
    die!(
        translate_to(transliterator, stdin, stdout, trace),
        "Error: {}"
    );
}
