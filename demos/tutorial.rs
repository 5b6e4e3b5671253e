use modalcell::{ExclusiveCell, ExclusiveMode, RefMut, SharedCell, SharedMode};

fn main() {
    // Let's start by creating a mode. Every cell belongs to exactly one mode ..
    let mut shared = SharedMode::new();

    // .. and we can create cells from it directly, or from an exclusive session.
    let exclusive: ExclusiveMode<'_, _> = shared.as_exclusive();
    let mut counter: ExclusiveCell<usize, _> = exclusive.new_cell(1);

    // The `ExclusiveCell` is the only handle that can write. We can hand out as many
    // read-only handles as we like.
    let reader: SharedCell<usize, _> = counter.as_shared();

    // Reading borrows `shared`, so `exclusive` is no longer usable from here on.
    // (uncomment the next line to see the compiler error)
    // let _ = counter.get_mut(exclusive);
    let value: &usize = reader.get(&shared);
    println!("Initial value: {value}");

    // To write again, we start a new session ..
    let exclusive: ExclusiveMode<'_, _> = shared.as_exclusive();

    // .. which is only possible because `value` is not used anymore.
    // println!("{value}");

    // The `RefMut` borrows both the cell and the session, and derefs to the value.
    let mut contents: RefMut<'_, usize, _> = counter.get_mut(exclusive);
    *contents += 1;

    // Once `contents` is done, reading is allowed again.
    println!("Updated value: {}", reader.get(&shared));

    // Using a cell with a mode that did not create it is caught at runtime.
    let other = SharedMode::new();
    match reader.try_get(&other) {
        Ok(_) => unreachable!(),
        Err(e) => println!("Foreign mode: {e}"),
    }
}

#[test]
fn runs() {
    main();
}
