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

use crate::testing::fn_instrumentation::*;
use crate::testing::logging::set_test_logger;
use log::LevelFilter;

#[test]
fn test_fn_mut_instrumentation() {
    let instrumentation = FnInstrumentation::new();
    let mut function: Box<dyn FnMut()> = Box::new(|| {
        instrumentation.record_call();
    });

    assert!(instrumentation.get_call_count() == 0);
    function.as_mut()();
    assert!(instrumentation.get_call_count() == 1);
}

#[test]
fn test_record_call_from() {
    let instrumentation = FnInstrumentation::new();
    instrumentation.record_call_from("pick");
    instrumentation.record_call_from("eat");
    instrumentation.record_call();
    assert_eq!(vec!["pick", "eat", ""], instrumentation.get_calls());
    assert_eq!(3, instrumentation.get_call_count());
}

#[test]
fn test_set_test_logger_is_repeatable() {
    set_test_logger(None);
    set_test_logger(Some(LevelFilter::Trace));
    assert_eq!(LevelFilter::Trace, log::max_level());
    set_test_logger(None);
}
