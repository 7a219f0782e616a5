//! Сканер с учетом вложенности скобок
//!
//! Курсор над заимствованной строкой. Каждая операция чтения продвигает
//! курсор вперед и возвращает срез исходного текста без копирования.
//! Вложенность отслеживается одним счетчиком глубины: для поддерживаемой
//! грамматики важен только баланс скобок, а не соответствие их видов.

use crate::common::{Error, Result};
use std::borrow::Cow;

/// Курсор над текстом инструкции
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Исходный текст
    input: &'a str,
    /// Начало непрочитанной части (байтовое смещение)
    start: usize,
    /// Конец непрочитанной части (байтовое смещение, исключительно)
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Создает сканер над всем текстом
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            end: input.len(),
        }
    }

    /// Возвращает непрочитанную часть текста
    pub fn remaining(&self) -> &'a str {
        &self.input[self.start..self.end]
    }

    /// Проверяет, прочитан ли текст полностью
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Проверяет, начинается ли непрочитанная часть с префикса (с учетом регистра)
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Пропускает литеральный префикс
    pub fn skip(&mut self, prefix: &str) -> Result<()> {
        if !self.starts_with(prefix) {
            return Err(Error::malformed_statement(format!(
                "expected '{}' at '{}'",
                prefix,
                self.abbreviation(30)
            )));
        }
        self.start += prefix.len();
        Ok(())
    }

    /// Пропускает заданное количество символов (не больше, чем осталось)
    pub fn skip_chars(&mut self, count: usize) {
        let rest = self.remaining();
        let offset = rest
            .char_indices()
            .nth(count)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.start += offset;
    }

    /// Читает лексему до первого пробельного символа.
    ///
    /// Если пробелов нет, возвращается весь остаток. Разделяющие пробелы
    /// также потребляются.
    pub fn read_until_whitespace(&mut self) -> &'a str {
        let rest = self.remaining();
        match rest.char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((pos, _)) => {
                let token = &rest[..pos];
                let after = &rest[pos..];
                let gap = after.len() - after.trim_start().len();
                self.start += pos + gap;
                token
            }
            None => {
                self.start = self.end;
                rest
            }
        }
    }

    /// Удаляет пробелы в начале и в конце непрочитанной части
    pub fn trim(&mut self) {
        let rest = self.remaining();
        self.start += rest.len() - rest.trim_start().len();
        let rest = self.remaining();
        self.end -= rest.len() - rest.trim_end().len();
    }

    /// Ищет символ `right`, закрывающий первую пару `left`/`right` верхнего уровня.
    ///
    /// Возвращает смещение относительно непрочитанной части или `None`,
    /// если глубина так и не вернулась к нулю.
    pub fn index_of_enclosing_pair(&self, left: char, right: char) -> Option<usize> {
        let mut depth: i32 = 0;
        for (i, c) in self.remaining().char_indices() {
            if c == left {
                depth += 1;
            } else if c == right {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Оставляет только содержимое первой пары скобок верхнего уровня.
    ///
    /// `CREATE TABLE t (columns...) suffix` превращается в `columns...`.
    pub fn trim_outside_enclosing_pair(&mut self, left: char, right: char) -> Result<()> {
        let close = self.index_of_enclosing_pair(left, right).ok_or_else(|| {
            Error::malformed_statement(format!(
                "no balanced '{}'...'{}' pair in '{}'",
                left,
                right,
                self.abbreviation(30)
            ))
        })?;
        self.end = self.start + close;

        let open = self.remaining().find(left).ok_or_else(|| {
            Error::malformed_statement(format!("missing '{}' before '{}'", left, right))
        })?;
        self.start += open + left.len_utf8();
        self.trim();
        Ok(())
    }

    /// Ищет первое вхождение `target` вне скобок (на нулевой глубине)
    pub fn index_of_excluding_enclosing_pair(
        &self,
        target: char,
        left: char,
        right: char,
    ) -> Option<usize> {
        let mut depth: i32 = 0;
        for (i, c) in self.remaining().char_indices() {
            if c == left {
                depth += 1;
            } else if c == right {
                depth -= 1;
            } else if c == target && depth == 0 {
                return Some(i);
            }
        }
        None
    }

    /// Разбивает остаток по `target` верхнего уровня, потребляя его целиком.
    ///
    /// Всегда возвращает хотя бы один сегмент: пустой буфер дает один пустой сегмент.
    pub fn split_excluding_enclosing_pair(
        &mut self,
        target: char,
        left: char,
        right: char,
    ) -> Vec<&'a str> {
        let mut segments = Vec::new();
        while let Some(pos) = self.index_of_excluding_enclosing_pair(target, left, right) {
            let rest = self.remaining();
            segments.push(rest[..pos].trim());
            self.start += pos + target.len_utf8();
        }
        segments.push(self.remaining().trim());
        self.start = self.end;
        segments
    }

    /// Сокращенное представление остатка для диагностических сообщений
    pub fn abbreviation(&self, max_chars: usize) -> Cow<'a, str> {
        let rest = self.remaining();
        match rest.char_indices().nth(max_chars) {
            Some((cut, _)) => Cow::Owned(format!("{}...", &rest[..cut])),
            None => Cow::Borrowed(rest),
        }
    }
}
