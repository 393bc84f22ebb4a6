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

use std::sync::Mutex;

/// This is a structure which contains the state relating to instrumenting a
/// function. The idea is that you would mutate it via its member functions to
/// e.g. record information about a function call. Because it has internal
/// synchronization, this can be done without retaining a mutable reference.
#[derive(Debug, Default)]
pub struct FnInstrumentation {
    calls: Mutex<Vec<String>>,
}

impl FnInstrumentation {
    /// Construct a new instrumentation state, with default-initialized values.
    pub fn new() -> FnInstrumentation {
        FnInstrumentation::default()
    }

    /// Record that the function being instrumented was called.
    pub fn record_call(&self) {
        self.record_call_from("");
    }

    /// Record that the function being instrumented was called, noting which
    /// caller (e.g. which command's action) it was.
    pub fn record_call_from(&self, caller: &str) {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(caller.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(caller.to_owned()),
        }
    }

    /// Return the current number of calls recorded.
    pub fn get_call_count(&self) -> u64 {
        self.get_calls().len() as u64
    }

    /// Return the recorded callers, in the order the calls were made.
    pub fn get_calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
