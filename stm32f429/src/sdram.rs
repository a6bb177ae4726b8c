//! External SDRAM behind the FMC.

use defmt::{info, warn};
use embassy_stm32::fmc::Fmc;
use embassy_stm32::peripherals::FMC;
use embassy_time::Delay;
use stm32_fmc::devices::is42s16400j_7::Is42s16400j;

use crate::board::SdramPins;

/// 64 Mbit
pub const SDRAM_SIZE: usize = 8 * 1024 * 1024;

pub struct Sdram {
    _controller: stm32_fmc::Sdram<Fmc<'static, FMC>, Is42s16400j>,
    ram: &'static mut [u32],
}

impl Sdram {
    /// Runs the JEDEC power-up sequence and maps the device at the bank 2
    /// address.
    pub fn init(p: SdramPins) -> Self {
        let mut controller = Fmc::sdram_a12bits_d16bits_4banks_bank2(
            p.fmc,
            p.a0,
            p.a1,
            p.a2,
            p.a3,
            p.a4,
            p.a5,
            p.a6,
            p.a7,
            p.a8,
            p.a9,
            p.a10,
            p.a11,
            p.ba0,
            p.ba1,
            p.d0,
            p.d1,
            p.d2,
            p.d3,
            p.d4,
            p.d5,
            p.d6,
            p.d7,
            p.d8,
            p.d9,
            p.d10,
            p.d11,
            p.d12,
            p.d13,
            p.d14,
            p.d15,
            p.nbl0,
            p.nbl1,
            p.sdcke1,
            p.sdclk,
            p.sdncas,
            p.sdne1,
            p.sdnras,
            p.sdnwe,
            Is42s16400j {},
        );

        let mut delay = Delay;
        let ram = unsafe {
            let ram_ptr: *mut u32 = controller.init(&mut delay);
            core::slice::from_raw_parts_mut(ram_ptr, SDRAM_SIZE / core::mem::size_of::<u32>())
        };
        info!("SDRAM mapped at {=usize:#x}", ram.as_ptr() as usize);

        Self {
            _controller: controller,
            ram,
        }
    }

    /// Writes a walking pattern over the first words and reads it back.
    pub fn self_test(&mut self) -> bool {
        const WORDS: usize = 16;

        for (i, word) in self.ram[..WORDS].iter_mut().enumerate() {
            *word = 0xA5A5_0000 | i as u32;
        }
        let ok = self.ram[..WORDS]
            .iter()
            .enumerate()
            .all(|(i, word)| *word == 0xA5A5_0000 | i as u32);

        if ok {
            info!("SDRAM check passed: {:x}", self.ram[..4]);
        } else {
            warn!("SDRAM check failed: {:x}", self.ram[..WORDS]);
        }
        ok
    }
}
