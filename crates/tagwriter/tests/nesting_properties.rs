//! Property tests for the tag stack: random begin/end sequences must keep the
//! stack, the indent level, and the staging buffers consistent.

use quickcheck_macros::quickcheck;
use tagwriter::{HtmlTag, HtmlTextWriter, StringSink, TagMetadata, WriterError};

/// Tags covering every open/indent policy combination plus an unknown name.
const TAGS: [&str; 6] = ["div", "span", "img", "pre", "tr", "x-custom"];

/// Decode one step: values below 170 open a tag, the rest close one.
fn step(
    writer: &mut HtmlTextWriter<StringSink>,
    model: &mut Vec<TagMetadata>,
    op: u8,
) -> Result<(), String> {
    if op < 170 {
        let metadata = TagMetadata::resolve(TAGS[usize::from(op) % TAGS.len()]);
        writer.add_attribute("data-step", &op.to_string());
        writer
            .render_begin_tag(metadata.clone())
            .map_err(|e| e.to_string())?;
        model.push(metadata);
        if !writer.pending_attributes().is_empty() {
            return Err("attributes survived render_begin_tag".to_string());
        }
    } else {
        let indent_before = writer.indent();
        match (writer.render_end_tag(), model.pop()) {
            (Ok(()), Some(_)) => {}
            (Err(WriterError::UnbalancedNesting), None) => {
                if writer.indent() != indent_before {
                    return Err("failed end tag changed the indent".to_string());
                }
            }
            (result, expected) => return Err(format!("{result:?} vs {expected:?}")),
        }
    }
    Ok(())
}

#[quickcheck]
fn indent_matches_indenting_frames(ops: Vec<u8>) -> bool {
    let mut writer = HtmlTextWriter::new(StringSink::new());
    let mut model = Vec::new();

    for op in ops {
        if step(&mut writer, &mut model, op).is_err() {
            return false;
        }
        let indenting = model.iter().filter(|m| m.indents()).count();
        if writer.open_tag_count() != model.len() || writer.indent() != indenting {
            return false;
        }
        if writer.current_tag() != model.last() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn closing_everything_restores_zero_indent(ops: Vec<u8>) -> bool {
    let mut writer = HtmlTextWriter::new(StringSink::new());
    let mut model = Vec::new();

    for op in ops {
        if step(&mut writer, &mut model, op).is_err() {
            return false;
        }
    }
    while writer.open_tag_count() > 0 {
        if writer.render_end_tag().is_err() {
            return false;
        }
    }
    writer.indent() == 0 && matches!(writer.render_end_tag(), Err(WriterError::UnbalancedNesting))
}

#[quickcheck]
fn balanced_output_closes_every_non_void_tag(depth: u8) -> bool {
    let depth = usize::from(depth % 16);
    let mut writer = HtmlTextWriter::new(StringSink::new());

    for i in 0..depth {
        let tag = if i % 2 == 0 { HtmlTag::Div } else { HtmlTag::Span };
        if writer.render_begin_tag(tag).is_err() {
            return false;
        }
    }
    for _ in 0..depth {
        if writer.render_end_tag().is_err() {
            return false;
        }
    }

    let output = writer.into_inner().into_string();
    output.matches("<div").count() == output.matches("</div>").count()
        && output.matches("<span").count() == output.matches("</span>").count()
}

#[quickcheck]
fn decrease_never_goes_below_zero(start: u8, decreases: u8) -> bool {
    let mut writer = HtmlTextWriter::new(StringSink::new());
    writer.set_indent(usize::from(start));
    for _ in 0..decreases {
        writer.decrease_indent();
    }
    writer.indent() == usize::from(start.saturating_sub(decreases))
}
