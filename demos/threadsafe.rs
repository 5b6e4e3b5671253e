use modalcell::threadsafe::{ExclusiveCell, SharedMode};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

fn main() {
    let mut shared = SharedMode::new_threadsafe();
    let cell = shared.new_cell(0);
    let reader = cell.as_shared();

    let (to_counter, counter_rx) = sync_channel(1);
    let (to_printer, printer_rx) = sync_channel(1);

    // The counter owns the only `ExclusiveCell` ..
    let counter = std::thread::spawn(|| counting_thread(cell, counter_rx, to_printer));

    loop {
        // .. and can only write to it while it holds the mode.
        to_counter.send(shared).unwrap();
        shared = printer_rx.recv().unwrap();

        let value: &usize = reader.get(&shared);
        println!("New count: {value}");
        if *value == 10 {
            break;
        }
    }

    drop(to_counter);
    counter.join().unwrap();
}

fn counting_thread(
    mut cell: ExclusiveCell<usize>,
    receiver: Receiver<SharedMode>,
    sender: SyncSender<SharedMode>,
) {
    while let Ok(mut shared) = receiver.recv() {
        // Entering exclusive mode only borrows `shared`, there is no lock.
        let exclusive = shared.as_exclusive();
        *cell.get_mut(exclusive) += 1;

        // `exclusive` can't be used after this, because `shared` is moved.
        if sender.send(shared).is_err() {
            break;
        }
    }
}

#[test]
fn runs() {
    main();
}
