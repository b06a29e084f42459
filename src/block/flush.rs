// Flush engine.
//
// One transition function, four granularities:
//
//   Item   emit the spooled item text, close the `<li>`
//   List   Item, then pop the innermost list level and close it
//   Para   emit the spooled text, leaving lists and items open
//   Block  Para, then List until only the body is left
//
// Every flush resets the paragraph mode to Plain.

use super::{ItemStatus, ParagraphMode, Parser};
use crate::diagnostic::Diagnostic;
use crate::emit::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlushLevel {
    Block,
    Para,
    Item,
    List,
}

impl<S: Sink + ?Sized> Parser<'_, S> {
    pub(crate) fn flush(&mut self, level: FlushLevel) -> Result<(), S::Error> {
        log_debug!(?level, mode = ?self.mode, depth = self.stack.depth(), "flush");
        match level {
            FlushLevel::Block => {
                self.close_block()?;
                while !self.stack.is_body() {
                    self.close_list()?;
                }
            }
            FlushLevel::Para => self.close_block()?,
            FlushLevel::Item if self.stack.is_body() => self.close_block()?,
            FlushLevel::Item => self.close_item()?,
            FlushLevel::List if self.stack.is_body() => {}
            FlushLevel::List => self.close_list()?,
        }
        self.mode = ParagraphMode::Plain;
        Ok(())
    }

    /// Write `<ul>`/`<ol>` and `<li>` for the current level if they are not
    /// open yet. Nothing to do in the body.
    pub(crate) fn open_container(&mut self) -> Result<(), S::Error> {
        let Some(kind) = self.stack.current().list_kind() else {
            return Ok(());
        };
        if self.stack.current().status == ItemStatus::Outside {
            let indent = self.list_indent();
            self.out.line(&indent, kind.open_tag())?;
            self.stack.current_mut().status = ItemStatus::InList;
        }
        if self.stack.current().status == ItemStatus::InList {
            let indent = self.item_indent();
            self.out.open(&indent, "<li>")?;
            self.stack.current_mut().status = ItemStatus::InItem;
        }
        Ok(())
    }

    fn close_block(&mut self) -> Result<(), S::Error> {
        let Some(content) = self.spool.take() else {
            return Ok(());
        };
        self.open_container()?;
        self.emit_block(&content)
    }

    fn emit_block(&mut self, content: &str) -> Result<(), S::Error> {
        let indent = self.block_indent();
        match self.mode {
            ParagraphMode::Preformatted => self.out.line(&indent, &format!("<pre>{content}</pre>")),
            ParagraphMode::Plain if self.stack.current().paragraph_wrapped => {
                self.out.line(&indent, &format!("<p>{content}</p>"))
            }
            ParagraphMode::Plain => self.out.text(content),
        }
    }

    fn close_item(&mut self) -> Result<(), S::Error> {
        let indent = self.item_indent();
        if let Some(content) = self.spool.take() {
            self.open_container()?;
            self.emit_block(&content)?;
        } else if self.stack.current().status != ItemStatus::InItem {
            return Ok(());
        }
        self.out.close(&indent, "</li>")?;
        self.stack.current_mut().status = ItemStatus::InList;
        Ok(())
    }

    pub(crate) fn close_list(&mut self) -> Result<(), S::Error> {
        self.close_item()?;
        let indent = self.list_indent();
        let Some(closed) = self.stack.pop() else {
            self.warn(Diagnostic::UnbalancedClose { line: self.line });
            return Ok(());
        };
        log_debug!(kind = ?closed.list_kind(), depth = self.stack.depth(), "close list level");
        match closed.list_kind() {
            Some(kind) if closed.status != ItemStatus::Outside => {
                self.out.line(&indent, kind.close_tag())?;
            }
            Some(kind) => self.warn(Diagnostic::EmptyList { line: self.line, kind }),
            None => self.warn(Diagnostic::UnbalancedClose { line: self.line }),
        }
        Ok(())
    }
}
