use crate::prelude::*;

/// Average token counts per prompt, per phase.
///
/// Assumptions: a ~35 word user prompt and a ~400 word answer, at roughly
/// 1.3 tokens per word. Pass 2 input is the pass 1 response plus the
/// extraction prompt; pass 2 output is the structured mentions JSON.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TokenAssumptions {
    pub pass1_input: u32,
    pub pass1_output: u32,
    pub pass2_input: u32,
    pub pass2_output: u32,
}

pub const AVG_TOKENS: TokenAssumptions = TokenAssumptions {
    pass1_input: 50,
    pass1_output: 500,
    pass2_input: 600,
    pass2_output: 100,
};
