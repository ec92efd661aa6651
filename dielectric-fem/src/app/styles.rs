// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use owo_colors::Style;

// Stylesheet used to colorize the run summary.
#[derive(Debug, Default)]
pub(crate) struct Styles {
    pub heading_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub warning_style: Style,
}

impl Styles {
    pub(crate) fn colorize(&mut self) {
        self.heading_style = Style::new().bold().bright_blue();
        self.label_style = Style::new().bright_green();
        self.value_style = Style::new().bright_white();
        self.warning_style = Style::new().bold().yellow();
    }

    /// Colours are only used when stdout is a terminal that supports them
    pub(crate) fn for_stdout() -> Self {
        let mut styles = Self::default();
        if supports_color::on(supports_color::Stream::Stdout).is_some() {
            styles.colorize();
        }
        styles
    }
}
