use keymatrix::{
    keyboard::{Controller, ExternalCommunicator, Key, KeySwitches, LayerSelector, SwitchEvent},
    matrix::{LogicalSlot, Position, SwitchAddress},
    Error, Vec,
};
use nokia_ac09892::{keymap::LAYERS, matrix::WIRING, LayoutVariant, Switch};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_slot_has_an_action() {
    for layer in 0..LAYERS.len() {
        for index in 0..128 {
            let key = LAYERS.action_for_slot(layer, LogicalSlot::new(index)).unwrap();
            assert!(key == Key::None || !key.is_noop());
        }
    }
}

#[test]
fn s1_is_unassigned_and_s49_types_q() {
    let iso = LayoutVariant::Iso;
    let s1 = iso.slot_for_switch(Switch(1)).unwrap();
    assert_eq!(s1.index(), 0);
    assert_eq!(LAYERS.action_for_slot(0, s1), Ok(Key::None));

    let s49 = iso.slot_for_switch(Switch(49)).unwrap();
    assert_eq!(s49.index(), 2 * 16 + 3);
    assert_eq!(LAYERS.action_for_slot(0, s49), Ok(Key::Q));
}

#[test]
fn out_of_range_lookups_fail() {
    assert_eq!(
        LAYERS.action_for_slot(0, LogicalSlot::new(128)),
        Err(Error::OutOfRangeSlot { slot: 128, len: 128 })
    );
    assert_eq!(
        LAYERS.action_for_slot(1, LogicalSlot::new(0)),
        Err(Error::OutOfRangeLayer { layer: 1, len: 1 })
    );
}

#[test]
fn missing_layer_returns_base_layer() {
    init_logging();
    assert_eq!(LAYERS.active_layer(5), LAYERS.base_layer());
    assert_eq!(LAYERS.active_layer(5), &nokia_ac09892::keymap::BASE);
}

#[test]
fn populated_slots_round_trip() {
    for variant in LayoutVariant::ALL {
        let positions = variant.positions();
        let mut populated = 0;
        for index in 0..128 {
            let slot = LogicalSlot::new(index);
            match positions.address_for_slot(slot).unwrap() {
                Position::Populated(address) => {
                    populated += 1;
                    assert_eq!(positions.slot_for_address(address), Ok(slot));
                }
                Position::Unpopulated => assert_eq!(variant.switch_at(slot), Ok(None)),
            }
        }
        assert_eq!(populated, 128 - variant.descriptor().unpopulated().count());
    }
}

#[test]
fn scanning_an_empty_position_is_no_action() {
    init_logging();
    let layout = LayoutVariant::Iso.layout();
    // S121 has no switch on the ISO fitting
    let address = WIRING.address_for_pins(
        keymatrix::matrix::Pin::a(7),
        keymatrix::matrix::Pin::b(10),
    );
    assert_eq!(address, Some(SwitchAddress::new(7, 11)));
    assert_eq!(layout.action_for_address(0, SwitchAddress::new(7, 11)), Key::None);
}

struct Scanner {
    events: Vec<SwitchEvent<SwitchAddress>, 8>,
}

impl KeySwitches<2, 8> for Scanner {
    type Identifier = SwitchAddress;

    fn scan(&mut self) -> Vec<SwitchEvent<SwitchAddress>, 8> {
        core::mem::take(&mut self.events)
    }
}

struct Host;

impl ExternalCommunicator for Host {
    type Error = ();

    fn is_ready(&self) -> bool {
        true
    }

    fn send_keys(&self, _keys: &[Key]) -> Result<(), ()> {
        Ok(())
    }
}

#[test]
fn pressing_s49_holds_q() {
    init_logging();
    let s49 = WIRING
        .address_for_pins(keymatrix::matrix::Pin::a(6), keymatrix::matrix::Pin::b(15))
        .unwrap();
    let mut events = Vec::new();
    events.push(SwitchEvent::press(s49)).unwrap();
    events.push(SwitchEvent::press(SwitchAddress::new(5, 14))).unwrap();
    // S121, not fitted
    events.push(SwitchEvent::press(SwitchAddress::new(7, 11))).unwrap();

    let selector = LayerSelector::new(3);
    let mut controller = Controller::new(
        Host,
        Scanner { events },
        LayoutVariant::Iso.layout(),
        &selector,
    );
    controller.main_loop();
    assert_eq!(controller.get_state().keys, [Key::Q]);
    controller.send_keys().unwrap();

    controller.key_switches.events.push(SwitchEvent::release(s49)).unwrap();
    controller.main_loop();
    assert!(controller.get_state().keys.is_empty());
}
