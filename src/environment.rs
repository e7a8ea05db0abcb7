// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//log
pub const ENV_FAMILYTZ_LOG: &str = "FAMILYTZ_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

//storage
pub const ENV_FAMILYTZ_STORE_DIR: &str = "FAMILYTZ_STORE_DIR";
pub const ENV_FAMILYTZ_SUITE: &str = "FAMILYTZ_SUITE";
pub const ENV_FAMILYTZ_CITIES: &str = "FAMILYTZ_CITIES";

//zone
pub const ENV_FAMILYTZ_ZONE: &str = "FAMILYTZ_ZONE";

pub const ENV_HOME: &str = "HOME";
