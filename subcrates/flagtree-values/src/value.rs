// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::ValueResult;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A Binding identifies the storage behind a `Var`. Two Values are bound to the
/// same destination if and only if their Bindings compare equal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Binding(usize);

/// A Var is a shared handle to a flag's destination. The parser writes into it
/// while scanning flags, and the application reads it back (typically from
/// inside a command's action) once parsing is done.
///
/// Vars are cheap to clone; all clones refer to the same storage. They are
/// intentionally not `Send`: a command tree is built and parsed on one thread.
pub struct Var<T>(Rc<RefCell<T>>);

impl<T> Var<T> {
    /// Construct a new Var holding the given initial value.
    pub fn new(value: T) -> Self {
        Var(Rc::new(RefCell::new(value)))
    }

    /// Overwrite the current value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Overwrite the current value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Borrow the current value.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Mutably borrow the current value.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Return the identity of the storage this Var refers to.
    pub fn binding(&self) -> Binding {
        Binding(Rc::as_ptr(&self.0) as *const () as usize)
    }
}

impl<T: Clone> Var<T> {
    /// Return a copy of the current value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Var<T> {
    fn clone(&self) -> Self {
        Var(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Var<T> {
    fn default() -> Self {
        Var::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Var").field(&*self.0.borrow()).finish()
    }
}

/// Value is the capability a flag's destination must provide so the parser
/// can store command-line text into it, without knowing its concrete type.
///
/// Implementing this trait for a new type is all it takes to accept that type
/// as a flag value.
pub trait Value {
    /// Render the destination's current value. This is called when the flag
    /// is registered, to capture the default shown in help output, so it must
    /// be the exact inverse of `parse`.
    fn stringify(&self) -> String;

    /// Convert the given text and store it into the destination.
    fn parse(&mut self, value: &str) -> ValueResult<()>;

    /// Whether this flag may appear without any value (e.g. "--verbose"), in
    /// which case it is parsed as if "true" were given. Flags of this kind
    /// never consume the following token.
    fn is_no_argument(&self) -> bool {
        false
    }

    /// The identity of the storage this Value writes into.
    fn binding(&self) -> Binding;
}

impl fmt::Debug for dyn Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Value({:?})", self.stringify())
    }
}
