pub enum Msg {
    Next,
    Previous,
    JumpTo(usize),
    /// Fired by the auto-play interval with the generation it was started under.
    Tick(u64),
    PointerEnter,
    PointerLeave,
}
