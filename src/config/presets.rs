//! Quick-pick values carried over from the interactive variants of this
//! tool. They only show up in help text; the engine accepts any valid
//! number.

pub static MONTHLY_PROMPT_PRESETS: &[u64] = &[100, 500, 1000, 5000];

pub static YEARLY_PROMPT_PRESETS: &[u64] = &[50, 100, 500, 750, 1000, 5000];

pub static PROJECT_PRESETS: &[u32] = &[1, 2, 5, 10];
