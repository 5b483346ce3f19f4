/// Defines a `Droppable` item type for the calling test. `LIVE` counts the instances not yet
/// dropped; every instance gets a fresh, unique value from `NEXT`, so items stay distinct after
/// earlier ones are dropped.
macro_rules! droppable {
    () => {
        #[derive(Eq, Ord, PartialEq, PartialOrd)]
        struct Droppable(i32);
        impl Droppable {
            fn new() -> Self {
                unsafe {
                    LIVE += 1;
                    NEXT += 1;
                    Droppable(NEXT)
                }
            }
        }
        impl Drop for Droppable {
            fn drop(&mut self) {
                unsafe {
                    LIVE -= 1;
                }
            }
        }

        static mut LIVE: i32 = 0;
        static mut NEXT: i32 = 0;
    };
}
