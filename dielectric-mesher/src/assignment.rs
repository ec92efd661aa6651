// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

/// The region of the device an element or point is assigned to.
///
/// Material properties are discontinuous at the interface radius, so a quantity
/// evaluated exactly on the interface needs to know which side it is approached from.
/// `Core` selects the limit from inside the interface, `Shell` the limit from outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Assignment {
    Core,
    Shell,
}

impl Assignment {
    pub fn is_core(&self) -> bool {
        matches!(self, Assignment::Core)
    }
}
