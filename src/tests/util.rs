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

use crate::util::*;

#[test]
fn test_count_true() {
    assert_eq!(0, count_true(&[]));
    assert_eq!(1, count_true(&[true, false]));
    assert_eq!(0, count_true(&[false, false, false]));
    assert_eq!(3, count_true(&[true, true, true]));
}
