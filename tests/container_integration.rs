// Container integration tests
//
// Drives containers the way a shard does: clients subscribe, click, wander
// out of view and leave, while the world side records spawned items.

use std::collections::HashMap;

use crossbeam_channel::Receiver;
use earth_inventory::{
    inventory::{Click, ContainerKind, Inventory, SlotStack, TxOutcome},
    item::{ItemData, ItemId},
    network::{ClientHandle, ClientId, ContainerMessage, ContainerSubscription, InterestManager},
    world::{ItemSpawner, VoxelPos, CHUNK_SIZE},
    Config,
};

/// Item spawner that remembers every call
#[derive(Debug, Default)]
struct MockWorld {
    spawned: Vec<(VoxelPos, ItemId, u32, ItemData)>,
}

impl ItemSpawner for MockWorld {
    fn spawn_item_at(&mut self, location: VoxelPos, item_id: ItemId, count: u32, data: ItemData) {
        self.spawned.push((location, item_id, count, data));
    }
}

fn connect(id: u32) -> (ClientHandle, Receiver<ContainerMessage>) {
    ClientHandle::channel(ClientId(id), Config::default().network.client_queue_capacity)
}

fn drain(rx: &Receiver<ContainerMessage>) -> Vec<ContainerMessage> {
    rx.try_iter().collect()
}

fn chest_at(location: VoxelPos) -> ContainerSubscription {
    ContainerSubscription::for_kind(ContainerKind::Chest, location, &Config::default())
}

#[test]
fn click_fans_out_slot_change_but_not_result() {
    let location = VoxelPos::new(8, 64, 8);
    let mut chest = chest_at(location);
    let mut interest = InterestManager::default();
    let (a, rx_a) = connect(1);
    let (b, rx_b) = connect(2);
    chest.add_subscriber(a.clone(), &mut interest);
    chest.add_subscriber(b, &mut interest);
    drain(&rx_a);
    drain(&rx_b);

    let cursor = SlotStack::new(ItemId::COBBLESTONE, 16, 0);
    let mut click = Click::left(2, cursor, SlotStack::empty(), 7);
    assert_eq!(chest.click(&a, &mut click), TxOutcome::Accepted);
    assert!(click.cursor.is_empty());

    let changed = ContainerMessage::SlotChanged { location, slot: cursor, index: 2 };
    assert_eq!(
        drain(&rx_a),
        vec![
            changed.clone(),
            ContainerMessage::CursorCorrected { location, cursor: SlotStack::empty() },
            ContainerMessage::TransactionResult { location, tx_id: 7, accepted: true },
        ]
    );
    assert_eq!(drain(&rx_b), vec![changed]);
}

#[test]
fn last_viewer_leaving_workbench_ejects_contents() {
    let location = VoxelPos::new(-20, 70, 5);
    let mut bench = ContainerSubscription::new(location, Inventory::new(10), true, 1);
    bench
        .inventory_mut()
        .set_slot(0, SlotStack::new(ItemId(1), 5, 0))
        .expect("slot 0 exists");
    let mut interest = InterestManager::default();
    let mut world = MockWorld::default();
    let (a, _rx_a) = connect(1);

    bench.add_subscriber(a, &mut interest);
    bench.remove_subscriber(ClientId(1), &mut interest, &mut world);

    assert_eq!(world.spawned, vec![(location, ItemId(1), 5, 0)]);
    assert_eq!(bench.inventory().slot(0), Some(SlotStack::empty()));
    assert_eq!(interest.registration_count(), 0);
}

#[test]
fn destroyed_container_keeps_its_items() {
    let location = VoxelPos::new(0, 5, 0);
    let mut bench = ContainerSubscription::for_kind(ContainerKind::Workbench, location, &Config::default());
    assert!(bench.eject_on_empty());
    bench
        .inventory_mut()
        .set_slot(4, SlotStack::new(ItemId::PLANKS, 3, 0))
        .expect("slot 4 exists");
    let mut interest = InterestManager::default();
    let mut world = MockWorld::default();
    let (a, rx_a) = connect(1);
    bench.add_subscriber(a, &mut interest);
    drain(&rx_a);

    bench.destroyed(&mut interest);
    bench.remove_subscriber(ClientId(1), &mut interest, &mut world);

    assert!(world.spawned.is_empty());
    assert_eq!(bench.inventory().slot(4), Some(SlotStack::new(ItemId::PLANKS, 3, 0)));
    assert_eq!(drain(&rx_a), vec![ContainerMessage::Unsubscribed { location }]);
    assert_eq!(interest.registration_count(), 0);
}

#[test]
fn leaving_view_unsubscribes_through_interest_manager() {
    let config = Config::default();
    let near = VoxelPos::new(1, 64, 1);
    let far = VoxelPos::new(100, 64, 1);
    let mut containers: HashMap<VoxelPos, ContainerSubscription> = HashMap::new();
    containers.insert(near, ContainerSubscription::for_kind(ContainerKind::Workbench, near, &config));
    containers.insert(far, ContainerSubscription::for_kind(ContainerKind::Chest, far, &config));
    let mut interest = InterestManager::default();
    let mut world = MockWorld::default();
    let (a, _rx_a) = connect(3);

    for container in containers.values_mut() {
        container.add_subscriber(a.clone(), &mut interest);
    }
    if let Some(bench) = containers.get_mut(&near) {
        bench
            .inventory_mut()
            .set_slot(9, SlotStack::new(ItemId::STICK, 4, 0))
            .expect("slot 9 exists");
    }

    let lost = interest.client_left_chunk(ClientId(3), near.to_chunk_pos(CHUNK_SIZE));
    assert_eq!(lost.len(), 1);
    for (location, handle) in lost {
        let container = containers.get_mut(&location).expect("container is loaded");
        assert_eq!(container.handle(), handle);
        container.visibility_lost(ClientId(3), &mut interest, &mut world);
    }

    assert_eq!(world.spawned, vec![(near, ItemId::STICK, 4, 0)]);
    assert!(!containers[&near].is_subscribed(ClientId(3)));
    assert!(containers[&far].is_subscribed(ClientId(3)));
    assert!(interest.is_registered(ClientId(3), far, containers[&far].handle()));
}

#[test]
fn take_all_items_preserves_totals() {
    let mut inventory = Inventory::new(6);
    let contents = [
        (0, SlotStack::new(ItemId::COAL, 20, 0)),
        (2, SlotStack::new(ItemId::WOOL, 3, 4)),
        (3, SlotStack::new(ItemId::COAL, 64, 0)),
        (5, SlotStack::new(ItemId::WOOL, 1, 4)),
    ];
    for (index, stack) in contents {
        inventory.set_slot(index, stack).expect("slot exists");
    }

    let mut totals: HashMap<(ItemId, ItemData), u32> = HashMap::new();
    for stack in inventory.take_all_items() {
        *totals.entry((stack.item_id, stack.data)).or_default() += stack.count;
    }

    assert_eq!(inventory.num_slots(), 6);
    assert!(inventory.iter().all(SlotStack::is_empty));
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&(ItemId::COAL, 0)], 84);
    assert_eq!(totals[&(ItemId::WOOL, 4)], 4);
}

#[test]
fn stale_or_out_of_range_clicks_change_nothing() {
    let location = VoxelPos::new(2, 2, 2);
    let mut chest = chest_at(location);
    let held = SlotStack::new(ItemId::IRON_INGOT, 10, 0);
    chest.inventory_mut().set_slot(0, held).expect("slot 0 exists");
    let mut interest = InterestManager::default();
    let (a, rx_a) = connect(1);
    chest.add_subscriber(a.clone(), &mut interest);
    drain(&rx_a);

    let cursor = SlotStack::new(ItemId::COAL, 1, 0);
    let clicks = [
        Click::left(-1, cursor, SlotStack::empty(), 1),
        Click::right(27, cursor, SlotStack::empty(), 2),
        Click::left(0, cursor, SlotStack::new(ItemId::IRON_INGOT, 9, 0), 3),
        Click::right(0, cursor, SlotStack::empty(), 4).with_shift(),
    ];
    for mut click in clicks {
        assert_eq!(chest.click(&a, &mut click), TxOutcome::Rejected);
        assert_eq!(click.cursor, cursor);
    }

    assert_eq!(chest.inventory().slot(0), Some(held));
    let messages = drain(&rx_a);
    assert_eq!(messages.len(), 8);
    assert!(messages
        .iter()
        .all(|m| !matches!(m, ContainerMessage::SlotChanged { .. })));
}
