use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScreenOptions: u64 {
        /// Are we on light theme?
        const LightTheme = 1 << 0;

        /// Debug overlay with rebuild stats
        const Debug = 1 << 1;

        /// Simulate a phone-sized window
        const Mobile = 1 << 2;

        /// Show marker B even when marker A is set
        const IndependentMarkers = 1 << 3;

        /// Stack months vertically instead of paging horizontally
        const VerticalLayout = 1 << 4;
    }
}
