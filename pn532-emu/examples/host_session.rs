// Host-side walkthrough against an emulated PN532.
//
// Plays what a host driver does over I2C: firmware query, SAM setup,
// discovery, authentication, write and read back.
//
// Usage:
//   RUST_LOG=debug cargo run -p pn532-emu --example host_session

use pn532_emu::prelude::*;
use pn532_emu::protocol::{OutboundFrame, TargetInfo};
use pn532_emu::test_support;

fn request(
    emu: &mut Emulator<MockPeripherals>,
    cmd: &Command,
) -> anyhow::Result<OutboundFrame> {
    test_support::exchange(emu, cmd.command_code(), &cmd.encode_params())?
        .ok_or_else(|| anyhow::anyhow!("no response to {:?}", cmd))
}

fn exchange(
    emu: &mut Emulator<MockPeripherals>,
    mifare: MifareCommand,
) -> anyhow::Result<Response> {
    let frame = request(
        emu,
        &Command::InDataExchange {
            target: 1,
            data: mifare.encode(),
        },
    )?;
    Ok(Response::decode(0x40, &frame)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut emu = EmulatorBuilder::new().build(MockPeripherals::new())?;

    let fw = request(&mut emu, &Command::GetFirmwareVersion)?;
    println!("Firmware: {}", bytes_to_hex_spaced(&fw.payload));

    request(&mut emu, &Command::SamConfiguration)?;

    // Operator places card 1 on the antenna; sampled on the next bus read.
    emu.peripherals_mut().set_card1(true);
    emu.read();

    let list = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: 0,
    };
    let uid = match Response::decode(0x4A, &request(&mut emu, &list)?)? {
        Response::InListPassiveTarget {
            target: Some(TargetInfo { uid, atqa, sak, .. }),
        } => {
            println!(
                "Found card UID {} (ATQA {}, SAK {:02X})",
                uid,
                bytes_to_hex_spaced(&atqa),
                sak
            );
            uid
        }
        _ => anyhow::bail!("no card in field"),
    };

    let auth = exchange(
        &mut emu,
        MifareCommand::Authenticate {
            kind: KeyKind::A,
            block: 4,
            key: Some(MifareKey::DEFAULT),
        },
    )?;
    println!("Authenticate sector 1 ({}): {:?}", uid, auth);

    let data = BlockData::from_bytes(*b"hello, emulator!");
    exchange(&mut emu, MifareCommand::Write { block: 4, data })?;

    match exchange(&mut emu, MifareCommand::Read { block: 4 })? {
        Response::InDataExchange {
            status: Status::Ok,
            data: Some(block),
        } => println!(
            "Block 4: {} {:?}",
            block.to_hex(),
            String::from_utf8_lossy(block.as_bytes())
        ),
        other => println!("Read failed: {:?}", other),
    }

    // Anything the firmware does not implement gets no reply at all.
    let silent = test_support::exchange(&mut emu, 0x52, &[0x00])?;
    println!("InRelease reply: {:?}", silent);

    Ok(())
}
