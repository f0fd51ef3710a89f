// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use daylog::Level;
use daylog::append::FileBuilder;
use daylog::append::Stdout;

fn main() {
    let file = FileBuilder::with_name("logs", "example")
        .rollover_daily()
        .retention_days(7)
        .build()
        .unwrap();

    daylog::builder()
        .level(Level::Debug)
        .append(Stdout::default())
        .append(file)
        .apply();

    let logger = daylog::default_logger();
    logger.error("Hello error!");
    logger.warn("Hello warn!");
    logger.info("Hello info!");
    logger.debug("Hello debug!");

    logger.close().unwrap();
}
