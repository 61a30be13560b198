/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Quadratic coefficient tables of the elementary-function unit.
//!
//! Every row holds `[c2, c1, c0]` as raw two's complement words,
//! indexed by the top seven fraction bits of the reduced operand.

use crate::quadratic::TABLE_SIZE;

/// `1/x` over [1, 2).
#[rustfmt::skip]
pub(crate) static RECIP_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0x000003f5, 0xffff0002, 0x03fffffe],
    [0x000003dd, 0xffff03f6, 0x03f80fe0],
    [0x000003c6, 0xffff07d3, 0x03f03f04],
    [0x000003b1, 0xffff0b99, 0x03e88cb3],
    [0x0000039b, 0xffff0f4a, 0x03e0f83c],
    [0x00000386, 0xffff12e5, 0x03d980f6],
    [0x00000373, 0xffff166b, 0x03d22636],
    [0x0000035f, 0xffff19de, 0x03cae758],
    [0x0000034d, 0xffff1d3d, 0x03c3c3c2],
    [0x0000033b, 0xffff2089, 0x03bcbadc],
    [0x00000329, 0xffff23c3, 0x03b5cc0f],
    [0x00000317, 0xffff26ec, 0x03aef6c9],
    [0x00000306, 0xffff2a03, 0x03a83a83],
    [0x000002f6, 0xffff2d09, 0x03a196b2],
    [0x000002e6, 0xffff2fff, 0x039b0ad1],
    [0x000002d7, 0xffff32e5, 0x03949660],
    [0x000002c7, 0xffff35bc, 0x038e38e3],
    [0x000002b8, 0xffff3884, 0x0387f1e0],
    [0x000002aa, 0xffff3b3d, 0x0381c0e0],
    [0x0000029d, 0xffff3de8, 0x037ba570],
    [0x00000290, 0xffff4085, 0x03759f21],
    [0x00000282, 0xffff4315, 0x036fad87],
    [0x00000277, 0xffff4597, 0x0369d035],
    [0x0000026a, 0xffff480d, 0x036406c8],
    [0x0000025d, 0xffff4a77, 0x035e50d7],
    [0x00000252, 0xffff4cd4, 0x0358ae04],
    [0x00000246, 0xffff4f26, 0x03531dec],
    [0x0000023c, 0xffff516c, 0x034da034],
    [0x00000231, 0xffff53a7, 0x03483484],
    [0x00000225, 0xffff55d8, 0x0342da7f],
    [0x0000021c, 0xffff57fd, 0x033d91d3],
    [0x00000211, 0xffff5a19, 0x03385a29],
    [0x00000207, 0xffff5c2a, 0x03333333],
    [0x000001fe, 0xffff5e31, 0x032e1c9f],
    [0x000001f5, 0xffff602f, 0x0329161e],
    [0x000001ea, 0xffff6224, 0x03241f69],
    [0x000001e2, 0xffff640f, 0x031f3831],
    [0x000001da, 0xffff65f1, 0x031a6032],
    [0x000001d1, 0xffff67cb, 0x03159722],
    [0x000001c9, 0xffff699c, 0x0310dcbf],
    [0x000001c1, 0xffff6b65, 0x030c30c3],
    [0x000001b9, 0xffff6d26, 0x030792ef],
    [0x000001b1, 0xffff6edf, 0x03030303],
    [0x000001aa, 0xffff7090, 0x02fe80c0],
    [0x000001a2, 0xffff723a, 0x02fa0be8],
    [0x0000019c, 0xffff73dc, 0x02f5a441],
    [0x00000193, 0xffff7578, 0x02f14990],
    [0x0000018d, 0xffff770c, 0x02ecfb9c],
    [0x00000186, 0xffff7899, 0x02e8ba2f],
    [0x0000017f, 0xffff7a20, 0x02e4850f],
    [0x00000179, 0xffff7ba0, 0x02e05c0a],
    [0x00000173, 0xffff7d19, 0x02dc3eee],
    [0x0000016e, 0xffff7e8c, 0x02d82d83],
    [0x00000166, 0xffff7ffa, 0x02d4279a],
    [0x00000161, 0xffff8161, 0x02d02d02],
    [0x0000015c, 0xffff82c2, 0x02cc3d8c],
    [0x00000155, 0xffff841e, 0x02c8590b],
    [0x00000151, 0xffff8573, 0x02c47f50],
    [0x0000014b, 0xffff86c4, 0x02c0b02c],
    [0x00000146, 0xffff880f, 0x02bceb76],
    [0x00000140, 0xffff8955, 0x02b93105],
    [0x0000013c, 0xffff8a95, 0x02b580ae],
    [0x00000136, 0xffff8bd1, 0x02b1da47],
    [0x00000131, 0xffff8d08, 0x02ae3da7],
    [0x0000012e, 0xffff8e39, 0x02aaaaaa],
    [0x00000129, 0xffff8f66, 0x02a7212a],
    [0x00000123, 0xffff908f, 0x02a3a0fe],
    [0x0000011f, 0xffff91b3, 0x02a02a02],
    [0x0000011b, 0xffff92d2, 0x029cbc15],
    [0x00000117, 0xffff93ed, 0x02995710],
    [0x00000112, 0xffff9504, 0x0295fad4],
    [0x0000010f, 0xffff9616, 0x0292a73d],
    [0x0000010a, 0xffff9725, 0x028f5c29],
    [0x00000107, 0xffff982f, 0x028c1979],
    [0x00000102, 0xffff9936, 0x0288df0c],
    [0x00000100, 0xffff9a38, 0x0285acc4],
    [0x000000fb, 0xffff9b37, 0x02828283],
    [0x000000f8, 0xffff9c32, 0x027f6028],
    [0x000000f3, 0xffff9d2a, 0x027c4598],
    [0x000000f0, 0xffff9e1e, 0x027932b4],
    [0x000000ed, 0xffff9f0e, 0x02762762],
    [0x000000e9, 0xffff9ffb, 0x02732386],
    [0x000000e7, 0xffffa0e4, 0x02702703],
    [0x000000e2, 0xffffa1cb, 0x026d31bf],
    [0x000000df, 0xffffa2ae, 0x026a439f],
    [0x000000de, 0xffffa38d, 0x02675c8b],
    [0x000000da, 0xffffa46a, 0x02647c69],
    [0x000000d6, 0xffffa544, 0x0261a320],
    [0x000000d4, 0xffffa61a, 0x025ed098],
    [0x000000d0, 0xffffa6ee, 0x025c04b9],
    [0x000000cd, 0xffffa7bf, 0x02593f69],
    [0x000000cc, 0xffffa88c, 0x02568096],
    [0x000000c7, 0xffffa958, 0x0253c825],
    [0x000000c5, 0xffffaa20, 0x02511602],
    [0x000000c4, 0xffffaae5, 0x024e6a17],
    [0x000000c1, 0xffffaba8, 0x024bc44e],
    [0x000000bd, 0xffffac69, 0x02492492],
    [0x000000ba, 0xffffad27, 0x02468acf],
    [0x000000b8, 0xffffade2, 0x0243f6f1],
    [0x000000b6, 0xffffae9b, 0x024168e1],
    [0x000000b4, 0xffffaf51, 0x023ee090],
    [0x000000b2, 0xffffb005, 0x023c5de7],
    [0x000000af, 0xffffb0b7, 0x0239e0d5],
    [0x000000ad, 0xffffb166, 0x02376948],
    [0x000000ab, 0xffffb213, 0x0234f72c],
    [0x000000a9, 0xffffb2be, 0x02328a6f],
    [0x000000a6, 0xffffb367, 0x02302302],
    [0x000000a5, 0xffffb40d, 0x022dc0d1],
    [0x000000a1, 0xffffb4b2, 0x022b63cc],
    [0x000000a0, 0xffffb554, 0x02290be2],
    [0x0000009f, 0xffffb5f4, 0x0226b902],
    [0x0000009b, 0xffffb693, 0x02246b1d],
    [0x0000009a, 0xffffb72f, 0x02222222],
    [0x00000099, 0xffffb7c9, 0x021fde02],
    [0x00000096, 0xffffb862, 0x021d9ead],
    [0x00000095, 0xffffb8f8, 0x021b6416],
    [0x00000093, 0xffffb98d, 0x02192e2a],
    [0x00000091, 0xffffba20, 0x0216fcdd],
    [0x0000008f, 0xffffbab1, 0x0214d022],
    [0x0000008f, 0xffffbb40, 0x0212a7e6],
    [0x0000008c, 0xffffbbce, 0x02108421],
    [0x0000008a, 0xffffbc5a, 0x020e64c2],
    [0x00000089, 0xffffbce4, 0x020c49bb],
    [0x00000087, 0xffffbd6d, 0x020a32ff],
    [0x00000085, 0xffffbdf4, 0x02082082],
    [0x00000084, 0xffffbe79, 0x02061237],
    [0x00000083, 0xffffbefd, 0x0204080f],
    [0x00000082, 0xffffbf7f, 0x02020201],
];

/// `sqrt(x)` over [1, 2), used for even exponents.
#[rustfmt::skip]
pub(crate) static SQRT_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0xffffff80, 0x00008000, 0x04000001],
    [0xffffff81, 0x00007f81, 0x0403fe03],
    [0xffffff83, 0x00007f03, 0x0407f811],
    [0xffffff86, 0x00007e86, 0x040bee36],
    [0xffffff86, 0x00007e0c, 0x040fe07d],
    [0xffffff88, 0x00007d92, 0x0413cef4],
    [0xffffff89, 0x00007d1a, 0x0417b9a4],
    [0xffffff8b, 0x00007ca3, 0x041ba097],
    [0xffffff8b, 0x00007c2e, 0x041f83d9],
    [0xffffff8e, 0x00007bb9, 0x04236374],
    [0xffffff8f, 0x00007b46, 0x04273f74],
    [0xffffff8f, 0x00007ad5, 0x042b17de],
    [0xffffff91, 0x00007a64, 0x042eecc2],
    [0xffffff91, 0x000079f5, 0x0432be26],
    [0xffffff92, 0x00007987, 0x04368c14],
    [0xffffff94, 0x0000791a, 0x043a5694],
    [0xffffff95, 0x000078ae, 0x043e1db3],
    [0xffffff97, 0x00007843, 0x0441e177],
    [0xffffff97, 0x000077da, 0x0445a1e9],
    [0xffffff99, 0x00007771, 0x04495f13],
    [0xffffff99, 0x0000770a, 0x044d18fe],
    [0xffffff9b, 0x000076a3, 0x0450cfb1],
    [0xffffff9b, 0x0000763e, 0x04548334],
    [0xffffff9d, 0x000075d9, 0x04583391],
    [0xffffff9d, 0x00007576, 0x045be0ce],
    [0xffffff9f, 0x00007513, 0x045f8af4],
    [0xffffff9f, 0x000074b2, 0x04633209],
    [0xffffffa1, 0x00007451, 0x0466d617],
    [0xffffffa1, 0x000073f2, 0x046a7724],
    [0xffffffa3, 0x00007393, 0x046e1538],
    [0xffffffa4, 0x00007335, 0x0471b05b],
    [0xffffffa3, 0x000072d9, 0x04754892],
    [0xffffffa4, 0x0000727d, 0x0478dde6],
    [0xffffffa6, 0x00007221, 0x047c705f],
    [0xffffffa7, 0x000071c7, 0x047fffff],
    [0xffffffa6, 0x0000716e, 0x04838cd3],
    [0xffffffa8, 0x00007115, 0x048716dc],
    [0xffffffa9, 0x000070bd, 0x048a9e24],
    [0xffffffaa, 0x00007066, 0x048e22af],
    [0xffffffaa, 0x00007010, 0x0491a486],
    [0xffffffac, 0x00006fba, 0x049523ae],
    [0xffffffad, 0x00006f65, 0x0498a02d],
    [0xffffffae, 0x00006f11, 0x049c1a08],
    [0xffffffae, 0x00006ebe, 0x049f9147],
    [0xffffffad, 0x00006e6c, 0x04a305ef],
    [0xffffffaf, 0x00006e1a, 0x04a67803],
    [0xffffffaf, 0x00006dc9, 0x04a9e78e],
    [0xffffffb1, 0x00006d78, 0x04ad5493],
    [0xffffffb0, 0x00006d29, 0x04b0bf16],
    [0xffffffb1, 0x00006cda, 0x04b4271e],
    [0xffffffb3, 0x00006c8b, 0x04b78cb1],
    [0xffffffb4, 0x00006c3d, 0x04baefd4],
    [0xffffffb4, 0x00006bf0, 0x04be508c],
    [0xffffffb4, 0x00006ba4, 0x04c1aedc],
    [0xffffffb5, 0x00006b58, 0x04c50acc],
    [0xffffffb5, 0x00006b0d, 0x04c86461],
    [0xffffffb7, 0x00006ac2, 0x04cbbb9d],
    [0xffffffb7, 0x00006a78, 0x04cf1089],
    [0xffffffb7, 0x00006a2f, 0x04d26326],
    [0xffffffb8, 0x000069e6, 0x04d5b37c],
    [0xffffffb8, 0x0000699e, 0x04d9018d],
    [0xffffffba, 0x00006956, 0x04dc4d5e],
    [0xffffffba, 0x0000690f, 0x04df96f6],
    [0xffffffba, 0x000068c9, 0x04e2de55],
    [0xffffffba, 0x00006883, 0x04e62386],
    [0xffffffba, 0x0000683e, 0x04e96687],
    [0xffffffbb, 0x000067f9, 0x04eca75f],
    [0xffffffbd, 0x000067b4, 0x04efe613],
    [0xffffffbe, 0x00006770, 0x04f322a6],
    [0xffffffbe, 0x0000672d, 0x04f65d1d],
    [0xffffffbf, 0x000066ea, 0x04f9957b],
    [0xffffffbe, 0x000066a8, 0x04fccbc7],
    [0xffffffbf, 0x00006666, 0x05000001],
    [0xffffffbf, 0x00006625, 0x0503322e],
    [0xffffffc0, 0x000065e4, 0x05066253],
    [0xffffffc0, 0x000065a4, 0x05099074],
    [0xffffffc1, 0x00006564, 0x050cbc94],
    [0xffffffc0, 0x00006525, 0x050fe6b8],
    [0xffffffc1, 0x000064e6, 0x05130ee1],
    [0xffffffc3, 0x000064a7, 0x05163515],
    [0xffffffc3, 0x00006469, 0x05195958],
    [0xffffffc2, 0x0000642c, 0x051c7bac],
    [0xffffffc2, 0x000063ef, 0x051f9c16],
    [0xffffffc4, 0x000063b2, 0x0522ba96],
    [0xffffffc3, 0x00006376, 0x0525d736],
    [0xffffffc4, 0x0000633a, 0x0528f1f3],
    [0xffffffc6, 0x000062fe, 0x052c0ad4],
    [0xffffffc6, 0x000062c3, 0x052f21db],
    [0xffffffc5, 0x00006289, 0x0532370c],
    [0xffffffc5, 0x0000624f, 0x05354a6a],
    [0xffffffc6, 0x00006215, 0x05385bf7],
    [0xffffffc8, 0x000061db, 0x053b6bb8],
    [0xffffffc8, 0x000061a2, 0x053e79b0],
    [0xffffffc7, 0x0000616a, 0x054185e1],
    [0xffffffc7, 0x00006132, 0x0544904e],
    [0xffffffc8, 0x000060fa, 0x054798fa],
    [0xffffffc9, 0x000060c2, 0x054a9feb],
    [0xffffffca, 0x0000608b, 0x054da51f],
    [0xffffffca, 0x00006054, 0x0550a89f],
    [0xffffffca, 0x0000601e, 0x0553aa68],
    [0xffffffca, 0x00005fe8, 0x0556aa81],
    [0xffffffcb, 0x00005fb2, 0x0559a8ea],
    [0xffffffcb, 0x00005f7d, 0x055ca5a7],
    [0xffffffcb, 0x00005f48, 0x055fa0bc],
    [0xffffffcd, 0x00005f13, 0x05629a29],
    [0xffffffcc, 0x00005edf, 0x056591f4],
    [0xffffffcd, 0x00005eab, 0x0568881c],
    [0xffffffcc, 0x00005e78, 0x056b7ca7],
    [0xffffffce, 0x00005e44, 0x056e6f97],
    [0xffffffce, 0x00005e11, 0x057160ee],
    [0xffffffcd, 0x00005ddf, 0x057450ad],
    [0xffffffcf, 0x00005dac, 0x05773ed9],
    [0xffffffcf, 0x00005d7a, 0x057a2b75],
    [0xffffffce, 0x00005d49, 0x057d1680],
    [0xffffffcf, 0x00005d17, 0x05800001],
    [0xffffffd0, 0x00005ce6, 0x0582e7f5],
    [0xffffffd0, 0x00005cb5, 0x0585ce64],
    [0xffffffd0, 0x00005c85, 0x0588b34c],
    [0xffffffd0, 0x00005c55, 0x058b96b2],
    [0xffffffd0, 0x00005c25, 0x058e7899],
    [0xffffffd1, 0x00005bf5, 0x05915902],
    [0xffffffd1, 0x00005bc6, 0x059437ed],
    [0xffffffd1, 0x00005b97, 0x05971560],
    [0xffffffd2, 0x00005b68, 0x0599f15c],
    [0xffffffd1, 0x00005b3a, 0x059ccbe3],
    [0xffffffd3, 0x00005b0b, 0x059fa4f8],
    [0xffffffd3, 0x00005add, 0x05a27c9c],
    [0xffffffd2, 0x00005ab0, 0x05a552d1],
];

/// `sqrt(2x)` over [1, 2), used for odd exponents.
#[rustfmt::skip]
pub(crate) static SQRT2_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0xffffff4c, 0x0000b505, 0x05a82799],
    [0xffffff4e, 0x0000b451, 0x05adccef],
    [0xffffff50, 0x0000b39f, 0x05b36caf],
    [0xffffff52, 0x0000b2ef, 0x05b906e8],
    [0xffffff55, 0x0000b241, 0x05be9ba8],
    [0xffffff57, 0x0000b195, 0x05c42b03],
    [0xffffff59, 0x0000b0eb, 0x05c9b506],
    [0xffffff5b, 0x0000b043, 0x05cf39c1],
    [0xffffff5c, 0x0000af9d, 0x05d4b944],
    [0xffffff5d, 0x0000aef9, 0x05da339b],
    [0xffffff60, 0x0000ae56, 0x05dfa8d7],
    [0xffffff62, 0x0000adb5, 0x05e51905],
    [0xffffff63, 0x0000ad16, 0x05ea8435],
    [0xffffff64, 0x0000ac79, 0x05efea71],
    [0xffffff66, 0x0000abdd, 0x05f54bc9],
    [0xffffff68, 0x0000ab43, 0x05faa849],
    [0xffffff68, 0x0000aaab, 0x06000000],
    [0xffffff6a, 0x0000aa14, 0x060552f8],
    [0xffffff6d, 0x0000a97e, 0x060aa140],
    [0xffffff6e, 0x0000a8ea, 0x060feae4],
    [0xffffff6f, 0x0000a858, 0x06152fed],
    [0xffffff71, 0x0000a7c7, 0x061a706a],
    [0xffffff72, 0x0000a738, 0x061fac66],
    [0xffffff73, 0x0000a6aa, 0x0624e3ed],
    [0xffffff75, 0x0000a61d, 0x062a170a],
    [0xffffff76, 0x0000a592, 0x062f45c7],
    [0xffffff78, 0x0000a508, 0x06347030],
    [0xffffff78, 0x0000a480, 0x06399650],
    [0xffffff79, 0x0000a3f9, 0x063eb830],
    [0xffffff7b, 0x0000a373, 0x0643d5dc],
    [0xffffff7d, 0x0000a2ee, 0x0648ef5f],
    [0xffffff7d, 0x0000a26b, 0x064e04c2],
    [0xffffff80, 0x0000a1e8, 0x0653160f],
    [0xffffff7f, 0x0000a168, 0x06582350],
    [0xffffff81, 0x0000a0e8, 0x065d2c8d],
    [0xffffff83, 0x0000a069, 0x066231d2],
    [0xffffff84, 0x00009fec, 0x06673326],
    [0xffffff84, 0x00009f70, 0x066c3095],
    [0xffffff85, 0x00009ef5, 0x06712a25],
    [0xffffff86, 0x00009e7b, 0x06761fe2],
    [0xffffff87, 0x00009e02, 0x067b11d3],
    [0xffffff89, 0x00009d8a, 0x067fffff],
    [0xffffff8a, 0x00009d13, 0x0684ea73],
    [0xffffff8c, 0x00009c9d, 0x0689d133],
    [0xffffff8d, 0x00009c28, 0x068eb44b],
    [0xffffff8d, 0x00009bb5, 0x069393bf],
    [0xffffff8e, 0x00009b42, 0x06986f9c],
    [0xffffff90, 0x00009ad0, 0x069d47e5],
    [0xffffff8f, 0x00009a60, 0x06a21ca6],
    [0xffffff91, 0x000099f0, 0x06a6ede2],
    [0xffffff92, 0x00009981, 0x06abbba6],
    [0xffffff93, 0x00009913, 0x06b085f6],
    [0xffffff94, 0x000098a6, 0x06b54cda],
    [0xffffff95, 0x0000983a, 0x06ba105a],
    [0xffffff95, 0x000097cf, 0x06bed07d],
    [0xffffff97, 0x00009764, 0x06c38d4a],
    [0xffffff97, 0x000096fb, 0x06c846c8],
    [0xffffff99, 0x00009692, 0x06ccfcfd],
    [0xffffff98, 0x0000962b, 0x06d1aff0],
    [0xffffff99, 0x000095c4, 0x06d65fa9],
    [0xffffff9a, 0x0000955e, 0x06db0c2e],
    [0xffffff9c, 0x000094f8, 0x06dfb586],
    [0xffffff9c, 0x00009494, 0x06e45bb5],
    [0xffffff9d, 0x00009430, 0x06e8fec6],
    [0xffffff9e, 0x000093cd, 0x06ed9eba],
    [0xffffff9f, 0x0000936b, 0x06f23b9a],
    [0xffffff9f, 0x0000930a, 0x06f6d56d],
    [0xffffffa0, 0x000092a9, 0x06fb6c38],
    [0xffffffa1, 0x00009249, 0x07000000],
    [0xffffffa1, 0x000091ea, 0x070490cd],
    [0xffffffa3, 0x0000918b, 0x07091ea2],
    [0xffffffa2, 0x0000912e, 0x070da987],
    [0xffffffa3, 0x000090d1, 0x07123180],
    [0xffffffa5, 0x00009074, 0x0716b695],
    [0xffffffa4, 0x00009019, 0x071b38c9],
    [0xffffffa5, 0x00008fbe, 0x071fb823],
    [0xffffffa7, 0x00008f63, 0x072434a8],
    [0xffffffa7, 0x00008f0a, 0x0728ae5c],
    [0xffffffa7, 0x00008eb1, 0x072d2547],
    [0xffffffa9, 0x00008e58, 0x0731996d],
    [0xffffffa8, 0x00008e01, 0x07360ad2],
    [0xffffffa9, 0x00008daa, 0x073a797b],
    [0xffffffab, 0x00008d53, 0x073ee56e],
    [0xffffffac, 0x00008cfd, 0x07434eb1],
    [0xffffffac, 0x00008ca8, 0x0747b548],
    [0xffffffab, 0x00008c54, 0x074c1937],
    [0xffffffac, 0x00008c00, 0x07507a83],
    [0xffffffad, 0x00008bac, 0x0754d933],
    [0xffffffae, 0x00008b59, 0x07593548],
    [0xffffffae, 0x00008b07, 0x075d8ec9],
    [0xffffffaf, 0x00008ab5, 0x0761e5b9],
    [0xffffffaf, 0x00008a64, 0x07663a1f],
    [0xffffffb1, 0x00008a13, 0x076a8bfc],
    [0xffffffb1, 0x000089c3, 0x076edb58],
    [0xffffffb1, 0x00008974, 0x07732834],
    [0xffffffb1, 0x00008925, 0x07777298],
    [0xffffffb3, 0x000088d6, 0x077bba85],
    [0xffffffb4, 0x00008888, 0x077fffff],
    [0xffffffb3, 0x0000883b, 0x0784430f],
    [0xffffffb4, 0x000087ee, 0x078883b3],
    [0xffffffb4, 0x000087a2, 0x078cc1f2],
    [0xffffffb4, 0x00008756, 0x0790fdd2],
    [0xffffffb6, 0x0000870a, 0x07953754],
    [0xffffffb5, 0x000086c0, 0x07996e7b],
    [0xffffffb6, 0x00008675, 0x079da34f],
    [0xffffffb7, 0x0000862b, 0x07a1d5d0],
    [0xffffffb6, 0x000085e2, 0x07a60604],
    [0xffffffb7, 0x00008599, 0x07aa33ed],
    [0xffffffb8, 0x00008550, 0x07ae5f92],
    [0xffffffb9, 0x00008508, 0x07b288f2],
    [0xffffffb8, 0x000084c1, 0x07b6b015],
    [0xffffffba, 0x00008479, 0x07bad4fd],
    [0xffffffb9, 0x00008433, 0x07bef7ac],
    [0xffffffbb, 0x000083ec, 0x07c31828],
    [0xffffffbc, 0x000083a6, 0x07c73673],
    [0xffffffbb, 0x00008361, 0x07cb5292],
    [0xffffffbc, 0x0000831c, 0x07cf6c85],
    [0xffffffbd, 0x000082d7, 0x07d38454],
    [0xffffffbd, 0x00008293, 0x07d79a00],
    [0xffffffbc, 0x00008250, 0x07dbad8b],
    [0xffffffbe, 0x0000820c, 0x07dfbefa],
    [0xffffffbe, 0x000081c9, 0x07e3ce52],
    [0xffffffbe, 0x00008187, 0x07e7db92],
    [0xffffffbe, 0x00008145, 0x07ebe6c0],
    [0xffffffbf, 0x00008103, 0x07efefdf],
    [0xffffffbe, 0x000080c2, 0x07f3f6f3],
    [0xffffffbf, 0x00008081, 0x07f7fbfc],
    [0xffffffc0, 0x00008040, 0x07fbff00],
];

/// `log2(x) / (x - 1)` over [1, 2).
#[rustfmt::skip]
pub(crate) static LOG2C_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0x000001e7, 0xffff4757, 0x05c551d9],
    [0x000001df, 0xffff493f, 0x05bf942d],
    [0x000001d8, 0xffff4b1e, 0x05b9e5a2],
    [0x000001cf, 0xffff4cf6, 0x05b445f1],
    [0x000001c8, 0xffff4ec5, 0x05aeb4dd],
    [0x000001c0, 0xffff508d, 0x05a93224],
    [0x000001b8, 0xffff524d, 0x05a3bd8a],
    [0x000001b1, 0xffff5405, 0x059e56d2],
    [0x000001ab, 0xffff55b6, 0x0598fdbe],
    [0x000001a4, 0xffff5760, 0x0593b218],
    [0x0000019d, 0xffff5903, 0x058e73a6],
    [0x00000195, 0xffff5aa0, 0x05894231],
    [0x0000018f, 0xffff5c35, 0x05841d85],
    [0x00000189, 0xffff5dc4, 0x057f056a],
    [0x00000183, 0xffff5f4d, 0x0579f9ad],
    [0x0000017c, 0xffff60d0, 0x0574fa1f],
    [0x00000177, 0xffff624c, 0x0570068e],
    [0x00000170, 0xffff63c3, 0x056b1ec8],
    [0x0000016c, 0xffff6533, 0x0566429f],
    [0x00000166, 0xffff669e, 0x056171e7],
    [0x00000160, 0xffff6804, 0x055cac6f],
    [0x0000015b, 0xffff6964, 0x0557f20e],
    [0x00000155, 0xffff6abf, 0x05534299],
    [0x00000151, 0xffff6c14, 0x054e9de6],
    [0x0000014b, 0xffff6d65, 0x054a03c9],
    [0x00000147, 0xffff6eb0, 0x0545741e],
    [0x00000142, 0xffff6ff7, 0x0540eeb8],
    [0x0000013c, 0xffff7139, 0x053c7378],
    [0x00000138, 0xffff7276, 0x05380231],
    [0x00000135, 0xffff73ae, 0x05339ac1],
    [0x00000130, 0xffff74e2, 0x052f3d05],
    [0x0000012b, 0xffff7612, 0x052ae8d6],
    [0x00000128, 0xffff773d, 0x05269e13],
    [0x00000122, 0xffff7865, 0x05225c9a],
    [0x00000120, 0xffff7987, 0x051e244a],
    [0x0000011c, 0xffff7aa6, 0x0519f500],
    [0x00000118, 0xffff7bc1, 0x0515ce9f],
    [0x00000114, 0xffff7cd8, 0x0511b105],
    [0x0000010e, 0xffff7dec, 0x050d9c15],
    [0x0000010c, 0xffff7efb, 0x05098fae],
    [0x00000108, 0xffff8007, 0x05058bb4],
    [0x00000104, 0xffff810f, 0x0501900c],
    [0x00000102, 0xffff8213, 0x04fd9c95],
    [0x000000fd, 0xffff8315, 0x04f9b134],
    [0x000000fb, 0xffff8412, 0x04f5cdd0],
    [0x000000f6, 0xffff850d, 0x04f1f24c],
    [0x000000f3, 0xffff8604, 0x04ee1e8e],
    [0x000000f0, 0xffff86f8, 0x04ea527a],
    [0x000000ee, 0xffff87e8, 0x04e68dfb],
    [0x000000ea, 0xffff88d6, 0x04e2d0f4],
    [0x000000e9, 0xffff89c0, 0x04df1b4c],
    [0x000000e5, 0xffff8aa8, 0x04db6cee],
    [0x000000e1, 0xffff8b8d, 0x04d7c5c1],
    [0x000000e0, 0xffff8c6e, 0x04d425ac],
    [0x000000dd, 0xffff8d4d, 0x04d08c9a],
    [0x000000da, 0xffff8e29, 0x04ccfa75],
    [0x000000d6, 0xffff8f03, 0x04c96f24],
    [0x000000d5, 0xffff8fd9, 0x04c5ea94],
    [0x000000d2, 0xffff90ad, 0x04c26caf],
    [0x000000ce, 0xffff917f, 0x04bef560],
    [0x000000cc, 0xffff924e, 0x04bb8490],
    [0x000000ca, 0xffff931a, 0x04b81a2f],
    [0x000000c7, 0xffff93e4, 0x04b4b626],
    [0x000000c6, 0xffff94ab, 0x04b15863],
    [0x000000c4, 0xffff9570, 0x04ae00d1],
    [0x000000c1, 0xffff9633, 0x04aaaf5f],
    [0x000000bd, 0xffff96f4, 0x04a763fb],
    [0x000000bb, 0xffff97b2, 0x04a41e91],
    [0x000000b9, 0xffff986e, 0x04a0df0e],
    [0x000000b8, 0xffff9927, 0x049da563],
    [0x000000b6, 0xffff99df, 0x049a717b],
    [0x000000b2, 0xffff9a95, 0x0497434a],
    [0x000000b1, 0xffff9b48, 0x04941abc],
    [0x000000b0, 0xffff9bf9, 0x0490f7bf],
    [0x000000ac, 0xffff9ca9, 0x048dda47],
    [0x000000ab, 0xffff9d56, 0x048ac240],
    [0x000000aa, 0xffff9e01, 0x0487af9c],
    [0x000000a7, 0xffff9eab, 0x0484a24b],
    [0x000000a6, 0xffff9f52, 0x04819a40],
    [0x000000a4, 0xffff9ff8, 0x047e9767],
    [0x000000a2, 0xffffa09c, 0x047b99b5],
    [0x000000a0, 0xffffa13e, 0x0478a11c],
    [0x0000009f, 0xffffa1de, 0x0475ad8b],
    [0x0000009c, 0xffffa27d, 0x0472bef5],
    [0x0000009c, 0xffffa319, 0x046fd54d],
    [0x0000009a, 0xffffa3b4, 0x046cf085],
    [0x00000098, 0xffffa44e, 0x046a108d],
    [0x00000095, 0xffffa4e6, 0x0467355c],
    [0x00000094, 0xffffa57c, 0x04645ee1],
    [0x00000094, 0xffffa610, 0x04618d11],
    [0x00000092, 0xffffa6a3, 0x045ebfe0],
    [0x0000008f, 0xffffa735, 0x045bf740],
    [0x0000008e, 0xffffa7c5, 0x04593324],
    [0x0000008d, 0xffffa853, 0x04567384],
    [0x0000008b, 0xffffa8e0, 0x0453b850],
    [0x0000008b, 0xffffa96b, 0x0451017c],
    [0x00000089, 0xffffa9f5, 0x044e4f00],
    [0x00000087, 0xffffaa7e, 0x044ba0cd],
    [0x00000086, 0xffffab05, 0x0448f6da],
    [0x00000084, 0xffffab8b, 0x0446511b],
    [0x00000084, 0xffffac0f, 0x0443af84],
    [0x00000081, 0xffffac93, 0x0441120b],
    [0x00000081, 0xffffad14, 0x043e78a7],
    [0x0000007f, 0xffffad95, 0x043be34b],
    [0x0000007e, 0xffffae14, 0x043951ef],
    [0x0000007d, 0xffffae92, 0x0436c486],
    [0x0000007b, 0xffffaf0f, 0x04343b09],
    [0x0000007b, 0xffffaf8a, 0x0431b56b],
    [0x0000007a, 0xffffb004, 0x042f33a6],
    [0x00000079, 0xffffb07d, 0x042cb5ad],
    [0x00000077, 0xffffb0f5, 0x042a3b79],
    [0x00000076, 0xffffb16c, 0x0427c4fd],
    [0x00000074, 0xffffb1e2, 0x04255233],
    [0x00000073, 0xffffb256, 0x0422e313],
    [0x00000073, 0xffffb2c9, 0x04207790],
    [0x00000070, 0xffffb33c, 0x041e0fa3],
    [0x0000006f, 0xffffb3ad, 0x041bab44],
    [0x0000006e, 0xffffb41d, 0x04194a6a],
    [0x0000006d, 0xffffb48c, 0x0416ed0b],
    [0x0000006c, 0xffffb4fa, 0x04149320],
    [0x0000006b, 0xffffb567, 0x04123ca0],
    [0x0000006c, 0xffffb5d2, 0x040fe984],
    [0x0000006b, 0xffffb63d, 0x040d99c3],
    [0x00000069, 0xffffb6a7, 0x040b4d56],
    [0x00000068, 0xffffb710, 0x04090434],
    [0x00000067, 0xffffb778, 0x0406be55],
    [0x00000066, 0xffffb7df, 0x04047bb2],
    [0x00000065, 0xffffb845, 0x04023c43],
];

/// `2^x` over [0, 1).
#[rustfmt::skip]
pub(crate) static EXP2_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0x000000f7, 0x0000b172, 0x03ffffff],
    [0x000000f7, 0x0000b269, 0x04058f6b],
    [0x000000f9, 0x0000b361, 0x040b268f],
    [0x000000fb, 0x0000b45a, 0x0410c579],
    [0x000000fb, 0x0000b555, 0x04166c35],
    [0x000000fd, 0x0000b651, 0x041c1aca],
    [0x000000ff, 0x0000b74e, 0x0421d146],
    [0x00000100, 0x0000b84d, 0x04278fb3],
    [0x00000102, 0x0000b94d, 0x042d561b],
    [0x00000102, 0x0000ba4f, 0x0433248c],
    [0x00000104, 0x0000bb52, 0x0438fb0c],
    [0x00000106, 0x0000bc56, 0x043ed9ac],
    [0x00000107, 0x0000bd5c, 0x0444c074],
    [0x00000109, 0x0000be63, 0x044aaf70],
    [0x0000010a, 0x0000bf6c, 0x0450a6ab],
    [0x0000010b, 0x0000c076, 0x0456a633],
    [0x0000010e, 0x0000c181, 0x045cae0f],
    [0x0000010f, 0x0000c28e, 0x0462be4f],
    [0x00000110, 0x0000c39d, 0x0468d6fa],
    [0x00000111, 0x0000c4ad, 0x046ef821],
    [0x00000113, 0x0000c5be, 0x047521cd],
    [0x00000114, 0x0000c6d1, 0x047b5409],
    [0x00000117, 0x0000c7e5, 0x04818ee1],
    [0x00000118, 0x0000c8fb, 0x0487d264],
    [0x00000118, 0x0000ca13, 0x048e1e9b],
    [0x0000011b, 0x0000cb2b, 0x04947395],
    [0x0000011c, 0x0000cc46, 0x049ad159],
    [0x0000011d, 0x0000cd62, 0x04a137f9],
    [0x00000120, 0x0000ce7f, 0x04a7a77d],
    [0x00000121, 0x0000cf9e, 0x04ae1ff5],
    [0x00000122, 0x0000d0bf, 0x04b4a16a],
    [0x00000124, 0x0000d1e1, 0x04bb2beb],
    [0x00000125, 0x0000d305, 0x04c1bf83],
    [0x00000127, 0x0000d42a, 0x04c85c40],
    [0x00000129, 0x0000d551, 0x04cf022c],
    [0x00000129, 0x0000d67a, 0x04d5b159],
    [0x0000012b, 0x0000d7a4, 0x04dc69ce],
    [0x0000012c, 0x0000d8d0, 0x04e32b9c],
    [0x0000012f, 0x0000d9fd, 0x04e9f6cd],
    [0x00000131, 0x0000db2c, 0x04f0cb70],
    [0x00000132, 0x0000dc5d, 0x04f7a992],
    [0x00000134, 0x0000dd8f, 0x04fe9141],
    [0x00000135, 0x0000dec3, 0x05058289],
    [0x00000136, 0x0000dff9, 0x050c7d77],
    [0x00000139, 0x0000e130, 0x05138218],
    [0x0000013b, 0x0000e269, 0x051a907a],
    [0x0000013c, 0x0000e3a4, 0x0521a8ad],
    [0x0000013e, 0x0000e4e0, 0x0528cabd],
    [0x00000140, 0x0000e61e, 0x052ff6b6],
    [0x00000142, 0x0000e75e, 0x05372ca6],
    [0x00000143, 0x0000e8a0, 0x053e6c9d],
    [0x00000145, 0x0000e9e3, 0x0545b6a9],
    [0x00000147, 0x0000eb28, 0x054d0ad6],
    [0x00000149, 0x0000ec6f, 0x05546932],
    [0x0000014a, 0x0000edb8, 0x055bd1cd],
    [0x0000014d, 0x0000ef02, 0x056344b4],
    [0x0000014f, 0x0000f04e, 0x056ac1f7],
    [0x00000151, 0x0000f19c, 0x057249a2],
    [0x00000152, 0x0000f2ec, 0x0579dbc6],
    [0x00000153, 0x0000f43e, 0x0581786f],
    [0x00000156, 0x0000f591, 0x05891fad],
    [0x00000157, 0x0000f6e7, 0x0590d18d],
    [0x00000159, 0x0000f83e, 0x05988e21],
    [0x0000015b, 0x0000f997, 0x05a05575],
    [0x0000015d, 0x0000faf2, 0x05a8279a],
    [0x0000015e, 0x0000fc4f, 0x05b0049e],
    [0x00000160, 0x0000fdae, 0x05b7ec8f],
    [0x00000163, 0x0000ff0e, 0x05bfdf7f],
    [0x00000164, 0x00010071, 0x05c7dd7a],
    [0x00000167, 0x000101d5, 0x05cfe692],
    [0x00000168, 0x0001033c, 0x05d7fad5],
    [0x0000016a, 0x000104a4, 0x05e01a54],
    [0x0000016d, 0x0001060e, 0x05e8451d],
    [0x0000016d, 0x0001077b, 0x05f07b41],
    [0x00000170, 0x000108e9, 0x05f8bccd],
    [0x00000172, 0x00010a59, 0x060109d6],
    [0x00000175, 0x00010bcb, 0x06096266],
    [0x00000175, 0x00010d40, 0x0611c692],
    [0x00000178, 0x00010eb6, 0x061a3666],
    [0x0000017a, 0x0001102e, 0x0622b1f7],
    [0x0000017d, 0x000111a8, 0x062b3951],
    [0x0000017e, 0x00011325, 0x0633cc86],
    [0x00000181, 0x000114a3, 0x063c6ba7],
    [0x00000182, 0x00011624, 0x064516c4],
    [0x00000186, 0x000117a6, 0x064dcdec],
    [0x00000187, 0x0001192b, 0x06569133],
    [0x00000189, 0x00011ab2, 0x065f60a8],
    [0x0000018b, 0x00011c3b, 0x06683c5c],
    [0x0000018d, 0x00011dc6, 0x06712462],
    [0x00000190, 0x00011f53, 0x067a18c7],
    [0x00000191, 0x000120e3, 0x0683199f],
    [0x00000194, 0x00012274, 0x068c26fc],
    [0x00000196, 0x00012408, 0x069540ed],
    [0x00000198, 0x0001259e, 0x069e6785],
    [0x0000019b, 0x00012736, 0x06a79ad5],
    [0x0000019e, 0x000128d0, 0x06b0daf0],
    [0x0000019f, 0x00012a6d, 0x06ba27e6],
    [0x000001a1, 0x00012c0c, 0x06c381ca],
    [0x000001a3, 0x00012dad, 0x06cce8af],
    [0x000001a6, 0x00012f50, 0x06d65ca4],
    [0x000001a8, 0x000130f6, 0x06dfddbc],
    [0x000001aa, 0x0001329e, 0x06e96c0c],
    [0x000001ad, 0x00013448, 0x06f307a4],
    [0x000001ae, 0x000135f5, 0x06fcb097],
    [0x000001b2, 0x000137a3, 0x070666f8],
    [0x000001b3, 0x00013955, 0x07102ad8],
    [0x000001b6, 0x00013b08, 0x0719fc4c],
    [0x000001b9, 0x00013cbe, 0x0723db64],
    [0x000001bb, 0x00013e76, 0x072dc838],
    [0x000001bd, 0x00014031, 0x0737c2d6],
    [0x000001c0, 0x000141ee, 0x0741cb52],
    [0x000001c1, 0x000143ae, 0x074be1c2],
    [0x000001c4, 0x00014570, 0x07560636],
    [0x000001c7, 0x00014734, 0x076038c5],
    [0x000001c9, 0x000148fb, 0x076a7981],
    [0x000001cc, 0x00014ac4, 0x0774c87d],
    [0x000001ce, 0x00014c90, 0x077f25cd],
    [0x000001d1, 0x00014e5e, 0x07899186],
    [0x000001d3, 0x0001502f, 0x07940bba],
    [0x000001d6, 0x00015202, 0x079e9480],
    [0x000001d9, 0x000153d8, 0x07a92be8],
    [0x000001da, 0x000155b1, 0x07b3d20b],
    [0x000001df, 0x0001578b, 0x07be86fb],
    [0x000001e0, 0x00015969, 0x07c94ace],
    [0x000001e3, 0x00015b49, 0x07d41d97],
    [0x000001e5, 0x00015d2c, 0x07deff6c],
    [0x000001e9, 0x00015f11, 0x07e9f060],
    [0x000001eb, 0x000160f9, 0x07f4f08b],
];

/// `sin(pi/2 x) / x` over [0, 1).
#[rustfmt::skip]
pub(crate) static SINC_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0xfffffd6b, 0x00000000, 0x06487ed4],
    [0xfffffd6a, 0xfffffd6b, 0x0648747e],
    [0xfffffd6b, 0xfffffad5, 0x0648557e],
    [0xfffffd6b, 0xfffff840, 0x064821d1],
    [0xfffffd6b, 0xfffff5ab, 0x0647d97c],
    [0xfffffd6b, 0xfffff316, 0x06477c7f],
    [0xfffffd6c, 0xfffff081, 0x06470adc],
    [0xfffffd6c, 0xffffeded, 0x06468496],
    [0xfffffd6d, 0xffffeb59, 0x0645e9b0],
    [0xfffffd6d, 0xffffe8c6, 0x06453a2d],
    [0xfffffd6e, 0xffffe633, 0x06447612],
    [0xfffffd6f, 0xffffe3a1, 0x06439d62],
    [0xfffffd6e, 0xffffe110, 0x0642b025],
    [0xfffffd6f, 0xffffde7f, 0x0641ae5f],
    [0xfffffd70, 0xffffdbef, 0x06409814],
    [0xfffffd73, 0xffffd95f, 0x063f6d4c],
    [0xfffffd73, 0xffffd6d1, 0x063e2e0f],
    [0xfffffd73, 0xffffd444, 0x063cda64],
    [0xfffffd76, 0xffffd1b7, 0x063b7250],
    [0xfffffd76, 0xffffcf2c, 0x0639f5e0],
    [0xfffffd77, 0xffffcca2, 0x06386519],
    [0xfffffd79, 0xffffca19, 0x0636c005],
    [0xfffffd7a, 0xffffc791, 0x063506b0],
    [0xfffffd7b, 0xffffc50b, 0x06333921],
    [0xfffffd7c, 0xffffc286, 0x06315765],
    [0xfffffd7e, 0xffffc002, 0x062f6187],
    [0xfffffd80, 0xffffbd80, 0x062d5790],
    [0xfffffd80, 0xffffbb00, 0x062b398f],
    [0xfffffd82, 0xffffb881, 0x0629078f],
    [0xfffffd85, 0xffffb603, 0x0626c19e],
    [0xfffffd87, 0xffffb387, 0x062467c9],
    [0xfffffd87, 0xffffb10e, 0x0621fa1d],
    [0xfffffd8b, 0xffffae95, 0x061f78aa],
    [0xfffffd8c, 0xffffac1f, 0x061ce37e],
    [0xfffffd8e, 0xffffa9ab, 0x061a3aa6],
    [0xfffffd8f, 0xffffa739, 0x06177e36],
    [0xfffffd91, 0xffffa4c9, 0x0614ae3b],
    [0xfffffd95, 0xffffa25a, 0x0611cac7],
    [0xfffffd97, 0xffff9fee, 0x060ed3eb],
    [0xfffffd98, 0xffff9d85, 0x060bc9b6],
    [0xfffffd9b, 0xffff9b1d, 0x0608ac3f],
    [0xfffffd9d, 0xffff98b8, 0x06057b94],
    [0xfffffda0, 0xffff9655, 0x060237c9],
    [0xfffffda2, 0xffff93f5, 0x05fee0f1],
    [0xfffffda5, 0xffff9197, 0x05fb7720],
    [0xfffffda7, 0xffff8f3c, 0x05f7fa6a],
    [0xfffffdaa, 0xffff8ce3, 0x05f46ae5],
    [0xfffffdac, 0xffff8a8d, 0x05f0c8a5],
    [0xfffffdb0, 0xffff8839, 0x05ed13be],
    [0xfffffdb2, 0xffff85e9, 0x05e94c46],
    [0xfffffdb5, 0xffff839b, 0x05e57256],
    [0xfffffdb8, 0xffff8150, 0x05e18602],
    [0xfffffdbb, 0xffff7f08, 0x05dd8761],
    [0xfffffdbd, 0xffff7cc3, 0x05d9768d],
    [0xfffffdc0, 0xffff7a81, 0x05d5539b],
    [0xfffffdc3, 0xffff7842, 0x05d11ea4],
    [0xfffffdc7, 0xffff7606, 0x05ccd7c1],
    [0xfffffdca, 0xffff73cd, 0x05c87f0d],
    [0xfffffdce, 0xffff7197, 0x05c4149f],
    [0xfffffdd1, 0xffff6f65, 0x05bf9890],
    [0xfffffdd5, 0xffff6d36, 0x05bb0afc],
    [0xfffffdd9, 0xffff6b0a, 0x05b66c00],
    [0xfffffddc, 0xffff68e2, 0x05b1bbb3],
    [0xfffffdde, 0xffff66be, 0x05acfa32],
    [0xfffffde3, 0xffff649c, 0x05a8279a],
    [0xfffffde5, 0xffff627f, 0x05a34405],
    [0xfffffdea, 0xffff6064, 0x059e4f92],
    [0xfffffded, 0xffff5e4e, 0x05994a5c],
    [0xfffffdf1, 0xffff5c3b, 0x05943482],
    [0xfffffdf5, 0xffff5a2c, 0x058f0e1f],
    [0xfffffdf8, 0xffff5821, 0x0589d754],
    [0xfffffdfd, 0xffff5619, 0x0584903e],
    [0xfffffe00, 0xffff5416, 0x057f38fc],
    [0xfffffe05, 0xffff5216, 0x0579d1ad],
    [0xfffffe08, 0xffff501b, 0x05745a70],
    [0xfffffe0c, 0xffff4e23, 0x056ed368],
    [0xfffffe11, 0xffff4c2f, 0x05693cb1],
    [0xfffffe14, 0xffff4a40, 0x0563966e],
    [0xfffffe19, 0xffff4854, 0x055de0c0],
    [0xfffffe1d, 0xffff466d, 0x05581bc5],
    [0xfffffe21, 0xffff448a, 0x055247a3],
    [0xfffffe26, 0xffff42ab, 0x054c6478],
    [0xfffffe29, 0xffff40d1, 0x0546726a],
    [0xfffffe2e, 0xffff3efb, 0x05407196],
    [0xfffffe32, 0xffff3d29, 0x053a6227],
    [0xfffffe36, 0xffff3b5c, 0x05344438],
    [0xfffffe3b, 0xffff3993, 0x052e17f0],
    [0xfffffe40, 0xffff37ce, 0x0527dd75],
    [0xfffffe45, 0xffff360e, 0x052194e7],
    [0xfffffe49, 0xffff3453, 0x051b3e6c],
    [0xfffffe4e, 0xffff329c, 0x0514da29],
    [0xfffffe53, 0xffff30ea, 0x050e6841],
    [0xfffffe57, 0xffff2f3d, 0x0507e8dc],
    [0xfffffe5c, 0xffff2d94, 0x05015c1f],
    [0xfffffe61, 0xffff2bf0, 0x04fac22e],
    [0xfffffe65, 0xffff2a51, 0x04f41b31],
    [0xfffffe6b, 0xffff28b6, 0x04ed674e],
    [0xfffffe6f, 0xffff2721, 0x04e6a6a9],
    [0xfffffe74, 0xffff2590, 0x04dfd96d],
    [0xfffffe79, 0xffff2404, 0x04d8ffbe],
    [0xfffffe7f, 0xffff227d, 0x04d219c3],
    [0xfffffe84, 0xffff20fb, 0x04cb27a7],
    [0xfffffe89, 0xffff1f7e, 0x04c4298f],
    [0xfffffe8c, 0xffff1e07, 0x04bd1fa4],
    [0xfffffe92, 0xffff1c94, 0x04b60a0d],
    [0xfffffe97, 0xffff1b26, 0x04aee8f6],
    [0xfffffe9d, 0xffff19bd, 0x04a7bc85],
    [0xfffffea2, 0xffff185a, 0x04a084e1],
    [0xfffffea6, 0xffff16fc, 0x04994239],
    [0xfffffeab, 0xffff15a3, 0x0491f4b1],
    [0xfffffeb1, 0xffff144f, 0x048a9c75],
    [0xfffffeb7, 0xffff1300, 0x048339b0],
    [0xfffffebb, 0xffff11b7, 0x047bcc8b],
    [0xfffffec2, 0xffff1072, 0x04745531],
    [0xfffffec6, 0xffff0f34, 0x046cd3c9],
    [0xfffffecd, 0xffff0dfa, 0x04654881],
    [0xfffffed2, 0xffff0cc6, 0x045db384],
    [0xfffffed6, 0xffff0b98, 0x045614fb],
    [0xfffffedd, 0xffff0a6e, 0x044e6d14],
    [0xfffffee3, 0xffff094a, 0x0446bbf7],
    [0xfffffee7, 0xffff082c, 0x043f01d2],
    [0xfffffeed, 0xffff0713, 0x04373ecf],
    [0xfffffef2, 0xffff0600, 0x042f731a],
    [0xfffffef7, 0xffff04f2, 0x04279ee2],
    [0xfffffefe, 0xffff03e9, 0x041fc24f],
    [0xffffff02, 0xffff02e7, 0x0417dd8f],
    [0xffffff09, 0xffff01e9, 0x040ff0d0],
    [0xffffff0d, 0xffff00f2, 0x0407fc3b],
];

/// `2/pi atan(x) / x` over [0, 1).
#[rustfmt::skip]
pub(crate) static ATANC_COEFFS: [[u32; 3]; TABLE_SIZE] = [
    [0xffffff27, 0x00000000, 0x028be60d],
    [0xffffff26, 0xffffff27, 0x028be2a9],
    [0xffffff26, 0xfffffe4e, 0x028bd879],
    [0xffffff26, 0xfffffd75, 0x028bc782],
    [0xffffff27, 0xfffffc9c, 0x028bafc3],
    [0xffffff29, 0xfffffbc3, 0x028b9140],
    [0xffffff28, 0xfffffaec, 0x028b6bfb],
    [0xffffff2a, 0xfffffa14, 0x028b3ffb],
    [0xffffff29, 0xfffff93e, 0x028b0d44],
    [0xffffff2a, 0xfffff868, 0x028ad3da],
    [0xffffff2b, 0xfffff793, 0x028a93c3],
    [0xffffff2c, 0xfffff6bf, 0x028a4d08],
    [0xffffff2d, 0xfffff5ec, 0x0289ffb1],
    [0xffffff2e, 0xfffff51a, 0x0289abc6],
    [0xffffff30, 0xfffff449, 0x02895150],
    [0xffffff33, 0xfffff379, 0x0288f057],
    [0xffffff34, 0xfffff2ab, 0x028888ea],
    [0xffffff34, 0xfffff1df, 0x02881b10],
    [0xffffff37, 0xfffff113, 0x0287a6d9],
    [0xffffff38, 0xfffff04a, 0x02872c4d],
    [0xffffff3a, 0xffffef82, 0x0286ab7c],
    [0xffffff3b, 0xffffeebc, 0x02862474],
    [0xffffff3f, 0xffffedf7, 0x02859740],
    [0xffffff40, 0xffffed35, 0x028503f3],
    [0xffffff41, 0xffffec75, 0x02846a9a],
    [0xffffff44, 0xffffebb6, 0x0283cb46],
    [0xffffff46, 0xffffeafa, 0x02832606],
    [0xffffff47, 0xffffea40, 0x02827aee],
    [0xffffff4a, 0xffffe988, 0x0281ca0a],
    [0xffffff4d, 0xffffe8d2, 0x02811371],
    [0xffffff4e, 0xffffe81f, 0x02805734],
    [0xffffff50, 0xffffe76e, 0x027f9566],
    [0xffffff54, 0xffffe6bf, 0x027ece16],
    [0xffffff56, 0xffffe613, 0x027e015d],
    [0xffffff59, 0xffffe569, 0x027d2f4d],
    [0xffffff5b, 0xffffe4c2, 0x027c57fa],
    [0xffffff5f, 0xffffe41d, 0x027b7b77],
    [0xffffff62, 0xffffe37b, 0x027a99d9],
    [0xffffff64, 0xffffe2dc, 0x0279b338],
    [0xffffff65, 0xffffe240, 0x0278c7a7],
    [0xffffff68, 0xffffe1a6, 0x0277d73b],
    [0xffffff6c, 0xffffe10e, 0x0276e20d],
    [0xffffff6e, 0xffffe07a, 0x0275e82e],
    [0xffffff72, 0xffffdfe8, 0x0274e9b7],
    [0xffffff75, 0xffffdf59, 0x0273e6be],
    [0xffffff77, 0xffffdecd, 0x0272df5a],
    [0xffffff7a, 0xffffde44, 0x0271d39f],
    [0xffffff7c, 0xffffddbe, 0x0270c3a6],
    [0xffffff7f, 0xffffdd3a, 0x026faf87],
    [0xffffff83, 0xffffdcb9, 0x026e9754],
    [0xffffff86, 0xffffdc3b, 0x026d7b28],
    [0xffffff89, 0xffffdbc0, 0x026c5b17],
    [0xffffff8b, 0xffffdb48, 0x026b373a],
    [0xffffff8d, 0xffffdad3, 0x026a0fa7],
    [0xffffff91, 0xffffda60, 0x0268e475],
    [0xffffff93, 0xffffd9f1, 0x0267b5b8],
    [0xffffff96, 0xffffd984, 0x0266838b],
    [0xffffff99, 0xffffd91a, 0x02654e03],
    [0xffffff9b, 0xffffd8b3, 0x02641536],
    [0xffffff9f, 0xffffd84e, 0x0262d93b],
    [0xffffffa1, 0xffffd7ed, 0x02619a26],
    [0xffffffa4, 0xffffd78e, 0x02605811],
    [0xffffffa6, 0xffffd732, 0x025f1311],
    [0xffffffaa, 0xffffd6d8, 0x025dcb3b],
    [0xffffffac, 0xffffd682, 0x025c80a3],
    [0xffffffaf, 0xffffd62e, 0x025b3362],
    [0xffffffb1, 0xffffd5dd, 0x0259e38d],
    [0xffffffb4, 0xffffd58e, 0x02589139],
    [0xffffffb7, 0xffffd542, 0x02573c79],
    [0xffffffb8, 0xffffd4f9, 0x0255e565],
    [0xffffffbb, 0xffffd4b2, 0x02548c0f],
    [0xffffffbd, 0xffffd46e, 0x0253308c],
    [0xffffffc0, 0xffffd42c, 0x0251d2f2],
    [0xffffffc2, 0xffffd3ed, 0x02507353],
    [0xffffffc5, 0xffffd3b0, 0x024f11c3],
    [0xffffffc9, 0xffffd375, 0x024dae57],
    [0xffffffcb, 0xffffd33d, 0x024c4923],
    [0xffffffcc, 0xffffd308, 0x024ae236],
    [0xffffffd0, 0xffffd2d4, 0x024979a6],
    [0xffffffd2, 0xffffd2a3, 0x02480f86],
    [0xffffffd3, 0xffffd275, 0x0246a3e5],
    [0xffffffd6, 0xffffd248, 0x024536d9],
    [0xffffffd7, 0xffffd21e, 0x0243c871],
    [0xffffffd9, 0xffffd1f6, 0x024258bf],
    [0xffffffdb, 0xffffd1d0, 0x0240e7d4],
    [0xffffffde, 0xffffd1ac, 0x023f75c0],
    [0xffffffe0, 0xffffd18a, 0x023e0297],
    [0xffffffe2, 0xffffd16a, 0x023c8e67],
    [0xffffffe4, 0xffffd14c, 0x023b1940],
    [0xffffffe7, 0xffffd130, 0x0239a331],
    [0xffffffe8, 0xffffd116, 0x02382c4d],
    [0xffffffea, 0xffffd0fe, 0x0236b49e],
    [0xffffffeb, 0xffffd0e8, 0x02353c37],
    [0xffffffee, 0xffffd0d3, 0x0233c325],
    [0xffffffef, 0xffffd0c1, 0x02324975],
    [0xfffffff1, 0xffffd0b0, 0x0230cf38],
    [0xfffffff2, 0xffffd0a1, 0x022f547b],
    [0xfffffff4, 0xffffd093, 0x022dd94c],
    [0xfffffff6, 0xffffd087, 0x022c5db5],
    [0xfffffff7, 0xffffd07d, 0x022ae1c6],
    [0xfffffff9, 0xffffd074, 0x0229658c],
    [0xfffffffa, 0xffffd06d, 0x0227e911],
    [0xfffffffd, 0xffffd067, 0x02266c62],
    [0xfffffffe, 0xffffd063, 0x0224ef8c],
    [0xffffffff, 0xffffd060, 0x0223729c],
    [0x00000000, 0xffffd05f, 0x0221f599],
    [0x00000001, 0xffffd05f, 0x02207892],
    [0x00000003, 0xffffd060, 0x021efb8f],
    [0x00000004, 0xffffd063, 0x021d7e9c],
    [0x00000005, 0xffffd067, 0x021c01c3],
    [0x00000006, 0xffffd06c, 0x021a8510],
    [0x00000008, 0xffffd072, 0x0219088a],
    [0x00000009, 0xffffd07a, 0x02178c3a],
    [0x00000009, 0xffffd083, 0x0216102e],
    [0x0000000a, 0xffffd08d, 0x0214946a],
    [0x0000000d, 0xffffd097, 0x021318fb],
    [0x0000000e, 0xffffd0a3, 0x02119de7],
    [0x0000000f, 0xffffd0b0, 0x02102337],
    [0x0000000e, 0xffffd0bf, 0x020ea8f2],
    [0x0000000f, 0xffffd0ce, 0x020d2f22],
    [0x00000010, 0xffffd0de, 0x020bb5ce],
    [0x00000013, 0xffffd0ee, 0x020a3cff],
    [0x00000013, 0xffffd100, 0x0208c4ba],
    [0x00000013, 0xffffd113, 0x02074d07],
    [0x00000015, 0xffffd126, 0x0205d5ed],
    [0x00000015, 0xffffd13b, 0x02045f71],
    [0x00000016, 0xffffd150, 0x0202e99d],
    [0x00000017, 0xffffd166, 0x02017475],
];
