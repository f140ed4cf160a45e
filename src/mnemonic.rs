//! Flat catalogue of every supported mnemonic.
//!
//! Each variant is an opaque token; the only thing callers can do with one
//! besides compare it is ask for its canonical lower-case display string via
//! [`Mnemonic::name`]. Two sentinels round out the set: [`Mnemonic::NONE`]
//! (an empty operand slot that never made it into an instruction) and
//! [`Mnemonic::INVALID`] (opcode-dispatch poison).

macro_rules! mnemonics {
    ($($variant:ident $(= $display:literal)?),* $(,)?) => {
        /// A single supported mnemonic, covering the integer ISA, x87, MMX,
        /// SSE1 through SSE4.2, AES-NI, CLMUL, BMI1/2, AVX, and FMA.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        pub enum Mnemonic {
            /// Empty operand-slot / no-mnemonic sentinel.
            NONE,
            /// Poison: the opcode dispatcher reached a blank table entry.
            INVALID,
            $($variant,)*
        }

        impl Mnemonic {
            /// Canonical lower-case display string, e.g. `"movdqa"`.
            pub fn name(self) -> &'static str {
                match self {
                    Mnemonic::NONE => "",
                    Mnemonic::INVALID => "??",
                    $(Mnemonic::$variant => mnemonics!(@disp $variant $(, $display)?),)*
                }
            }
        }
    };

    // Variants spelled identically to their display string (the common
    // case) just stringify the identifier -- no per-entry literal needed.
    (@disp $variant:ident) => { stringify!($variant) };
    // A few mnemonics collide with Rust keywords (`in`, `int`, `loop`, `or`,
    // ...); those variants carry a trailing underscore and an explicit
    // `= "..."` display override so they still print the way the AMD manual
    // spells them.
    (@disp $variant:ident, $display:literal) => { $display };
}
#[allow(non_camel_case_types)]
mod generated {
    super::mnemonics! {
        aaa, aad, aam, aas, adc, add, addpd, addps, addsd, addss, addsubpd, addsubps,
        aesdec, aesdeclast, aesenc, aesenclast, aesimc, aeskeygenassist,
        and, andnpd, andnps, andpd, andps,
        blendpd, blendps, blendvpd, blendvps, bound, bsf, bsr, bswap, bt, btc, btr, bts,
        call, callf, cbw, cdq, cdqe, clc, cld, clflush, clgi, cli, clts, cmc,
        cmova, cmovb, cmovbe, cmovg, cmovge, cmovl, cmovle, cmovna, cmovnb, cmovnbe,
        cmovno, cmovnp, cmovns, cmovnz, cmovo, cmovp, cmovs, cmovz,
        cmp, cmppd, cmpps, cmps, cmpsb, cmpsd, cmpsq, cmpss, cmpsw,
        cmpxchg, cmpxchg16b, cmpxchg8b, comisd, comiss, cpuid, cqo, crc32,
        cvtdq2pd, cvtdq2ps, cvtpd2dq, cvtpd2pi, cvtpd2ps, cvtpi2pd, cvtpi2ps,
        cvtps2dq, cvtps2pd, cvtps2pi, cvtsd2si, cvtsd2ss, cvtsi2sd, cvtsi2ss,
        cvtss2sd, cvtss2si, cvttpd2dq, cvttpd2pi, cvttps2dq, cvttps2pi,
        cvttsd2si, cvttss2si,
        cwd, cwde, daa, das, dec, div, divpd, divps, divsd, divss, dppd, dpps,
        emms, enter, extractps, extrq,
        f2xm1, fabs, fadd, faddp, fbld, fbstp, fchs,
        fcmovb, fcmovbe, fcmove, fcmovnb, fcmovnbe, fcmovne, fcmovnu, fcmovu,
        fcom, fcomi, fcomip, fcomp, fcompp, fcos, fdecstp, fdiv, fdivp, fdivr, fdivrp,
        ffree, fiadd, ficom, ficomp, fidiv, fidivr, fild, fimul, fincstp,
        fist, fistp, fisttp, fisub, fisubr,
        fld, fld1, fldcw, fldenv, fldl2e, fldl2t, fldlg2, fldln2, fldpi, fldz,
        fmul, fmulp, fnclex, fninit, fnop, fnsave, fnstcw, fnstenv, fnstsw,
        fpatan, fprem, fprem1, fptan, frndint, frstor, fscale, fsin, fsincos,
        fsqrt, fst, fstp, fsub, fsubp, fsubr, fsubrp, ftst,
        fucom, fucomi, fucomip, fucomp, fucompp, fwait, fxam, fxch, fxrstor, fxsave,
        fxtract, fyl2x, fyl2xp1,
        haddpd, haddps, hlt, hsubpd, hsubps,
        icebp, idiv, imul, in_ = "in", inc, ins, insb, insd, insertps, insw,
        insertq, int, int3, into, invd, invlpg, invlpga, iret,
        ja, jb, jg, jge, jl, jle, jmp, jna, jnb, jnl, jnle, jno, jnp, jns, jnz,
        jo, jp, js, jz, jecxz,
        lahf, lar, lddqu, ldmxcsr, lds, lea, leave, les, lfence, lfs, lgdt, lgs,
        lidt, lldt, lmsw, lods, lodsb, lodsd, lodsq, lodsw, loop_ = "loop", loopnz, loopz,
        lsl, lss, ltr, lzcnt,
        maskmovdqu, maskmovq, maxpd, maxps, maxsd, maxss, mfence,
        minpd, minps, minsd, minss, monitor, monitorx, mwaitx,
        mov, movapd, movaps, movbe, movd, movddup, movdq2q, movdqa, movdqu,
        movhlps, movhpd, movhps, movlhps, movlpd, movlps, movmskpd, movmskps,
        movntdq, movntdqa, movnti, movntpd, movntps, movntq, movntsd, movntss,
        movq, movq2dq, movs, movsb, movsd, movshdup, movsldup, movsq, movss,
        movsw, movsx, movsxd, movupd, movups, movzx, mpsadbw, mul, mulpd, mulps,
        mulsd, mulss, mwait,
        neg, nop, not, or, orpd, orps, out, outs, outsb, outsd, outsw,
        pabsb, pabsd, pabsw,
        packssdw, packsswb, packusdw, packuswb,
        paddb, paddd, paddq, paddsb, paddsw, paddusb, paddusw, paddw,
        palignr, pand, pandn, pause,
        pavgb, pavgusb, pavgw,
        pblendvb, pblendw, pclmulqdq,
        pcmpeqb, pcmpeqd, pcmpeqq, pcmpeqw,
        pcmpestri, pcmpestrm, pcmpgtb, pcmpgtd, pcmpgtq, pcmpgtw,
        pcmpistri, pcmpistrm,
        pextrb, pextrd, pextrw,
        pf2id, pf2iw, pfacc, pfadd, pfcmpeq, pfcmpge, pfcmpgt, pfmax, pfmin, pfmul,
        pfnacc, pfpnacc, pfrcp, pfrcpit1, pfrcpit2, pfrsqit1, pfrsqrt, pfsub, pfsubr,
        phaddd, phaddsw, phaddw, phminposuw, phsubd, phsubsw, phsubw,
        pi2fd, pi2fw,
        pinsrb, pinsrd, pinsrq, pinsrw,
        pmaddubsw, pmaddwd,
        pmaxsb, pmaxsd, pmaxsw, pmaxub, pmaxud, pmaxuw,
        pminsb, pminsd, pminsw, pminub, pminud, pminuw,
        pmovmskb,
        pmovsxbd, pmovsxbq, pmovsxbw, pmovsxdq, pmovsxwd, pmovsxwq,
        pmovzxbd, pmovzxbq, pmovzxbw, pmovzxdq, pmovzxwd, pmovzxwq,
        pmuldq, pmulhrsw, pmulhrw, pmulhuw, pmulhw, pmulld, pmullw, pmuludq,
        pop, popa, popad, popcnt, popf, por,
        prefetch, psadbw,
        pshufb, pshufd, pshufhw, pshuflw, pshufw,
        psignb, psignd, psignw,
        pslld, pslldq, psllq, psllw,
        psrad, psraw, psrld, psrldq, psrlq, psrlw,
        psubb, psubd, psubq, psubsb, psubsw, psubusb, psubusw, psubw,
        pswapd, ptest,
        punpckhbw, punpckhdq, punpckhqdq, punpckhwd,
        punpcklbw, punpckldq, punpcklqdq, punpcklwd,
        push, pusha, pushad, pushf, pxor,
        rcl, rcpps, rcpss, rcr,
        rdfsbase, rdgsbase, rdmsr, rdpmc, rdrand, rdseed, rdtsc, rdtscp,
        ret, retf, rol, ror,
        roundpd, roundps, roundsd, roundss, rsm, rsqrtps, rsqrtss,
        sahf, sal, sar, sbb,
        scas, scasb, scasd, scasq, scasw,
        seta, setb, setbe, setg, setge, setl, setle, setna, setnb, setnbe, setno,
        setnp, setns, setnz, seto, setp, sets, setz,
        sfence, sgdt, shl, shld, shr, shrd, shufpd, shufps, sidt, skinit, sldt, smsw,
        sqrtpd, sqrtps, sqrtsd, sqrtss,
        stc, std, stgi, sti, stmxcsr,
        stos, stosb, stosd, stosq, stosw, str, sub, subpd, subps, subsd, subss,
        swapgs, syscall, sysenter, sysexit, sysret,
        vmcall, vmload, vmmcall, vmrun, vmsave,
        test, tzcnt,
        ucomisd, ucomiss, ud0, ud1, ud2,
        unpckhpd, unpckhps, unpcklpd, unpcklps,
        verr, verw,
        wait, wbinvd, wrfsbase, wrgsbase, wrmsr,
        xadd, xchg, xgetbv, xlat, xor, xorpd, xorps, xrstor, xsave, xsaveopt, xsetbv,

        // BMI1 / BMI2 (VEX/legacy-mixed group)
        andn, bextr, blsi, blsmsk, blsr, bzhi, mulx, pdep, pext, rorx, sarx, shlx, shrx,

        // AVX / AVX2 / FMA
        vaddpd, vaddps, vaddsd, vaddss, vaddsubpd, vaddsubps,
        vaesdec, vaesdeclast, vaesenc, vaesenclast, vaesimc, vaeskeygenassist,
        vandnpd, vandnps, vandpd, vandps,
        vblendpd, vblendps, vblendvpd, vblendvps,
        vbroadcastf128, vbroadcasti128, vbroadcastsd, vbroadcastss,
        vcmppd, vcmpps, vcmpsd, vcmpss,
        vcomisd, vcomiss,
        vcvtdq2pd, vcvtdq2ps, vcvtpd2dq, vcvtpd2ps, vcvtph2ps, vcvtps2dq, vcvtps2pd,
        vcvtps2ph, vcvtsd2si, vcvtsd2ss, vcvtsi2sd, vcvtsi2ss, vcvtss2sd, vcvtss2si,
        vcvttpd2dq, vcvttps2dq, vcvttsd2si, vcvttss2si,
        vdivpd, vdivps, vdivsd, vdivss, vdppd, vdpps,
        vextractf128, vextracti128, vextractps,
        vfmadd132pd, vfmadd132ps, vfmadd132sd, vfmadd132ss,
        vfmadd213pd, vfmadd213ps, vfmadd213sd, vfmadd213ss,
        vfmadd231pd, vfmadd231ps, vfmadd231sd, vfmadd231ss,
        vfmaddsub132pd, vfmaddsub132ps, vfmaddsub213pd, vfmaddsub213ps,
        vfmaddsub231pd, vfmaddsub231ps,
        vfmsub132pd, vfmsub132ps, vfmsub132sd, vfmsub132ss,
        vfmsub213pd, vfmsub213ps, vfmsub213sd, vfmsub213ss,
        vfmsub231pd, vfmsub231ps, vfmsub231sd, vfmsub231ss,
        vfmsubadd132pd, vfmsubadd132ps, vfmsubadd213pd, vfmsubadd213ps,
        vfmsubadd231pd, vfmsubadd231ps,
        vfnmadd132pd, vfnmadd132ps, vfnmadd132sd, vfnmadd132ss,
        vfnmadd213pd, vfnmadd213ps, vfnmadd213sd, vfnmadd213ss,
        vfnmadd231pd, vfnmadd231ps, vfnmadd231sd, vfnmadd231ss,
        vfnmsub132pd, vfnmsub132ps, vfnmsub132sd, vfnmsub132ss,
        vfnmsub213pd, vfnmsub213ps, vfnmsub213sd, vfnmsub213ss,
        vfnmsub231pd, vfnmsub231ps, vfnmsub231sd, vfnmsub231ss,
        // FMA4 (AMD four-operand destructive-free forms)
        vfmaddpd, vfmaddps, vfmaddsd, vfmaddss,
        vfmaddsubpd, vfmaddsubps,
        vfmsubaddpd, vfmsubaddps,
        vfmsubpd, vfmsubps, vfmsubsd, vfmsubss,
        vfnmaddpd, vfnmaddps, vfnmaddsd, vfnmaddss,
        vfnmsubpd, vfnmsubps, vfnmsubsd, vfnmsubss,
        vgatherdpd, vgatherdps, vgatherqpd, vgatherqps,
        vhaddpd, vhaddps, vhsubpd, vhsubps,
        vinsertf128, vinserti128, vinsertps,
        vlddqu, vldmxcsr,
        vmaskmovdqu, vmaskmovpd, vmaskmovps,
        vmaxpd, vmaxps, vmaxsd, vmaxss, vminpd, vminps, vminsd, vminss,
        vmovapd, vmovaps, vmovd, vmovddup, vmovdqa, vmovdqu,
        vmovhlps, vmovhpd, vmovhps, vmovlhps, vmovlpd, vmovlps,
        vmovmskpd, vmovmskps, vmovntdq, vmovntdqa, vmovntpd, vmovntps,
        vmovq, vmovsd, vmovshdup, vmovsldup, vmovss, vmovupd, vmovups,
        vmpsadbw, vmulpd, vmulps, vmulsd, vmulss,
        vorpd, vorps,
        vpabsb, vpabsd, vpabsw,
        vpackssdw, vpacksswb, vpackusdw, vpackuswb,
        vpaddb, vpaddd, vpaddq, vpaddsb, vpaddsw, vpaddusb, vpaddusw, vpaddw,
        vpalignr, vpand, vpandn,
        vpavgb, vpavgw,
        vpblendd, vpblendvb, vpblendw,
        vpbroadcastb, vpbroadcastd, vpbroadcastq, vpbroadcastw,
        vpclmulqdq,
        vpcmpeqb, vpcmpeqd, vpcmpeqq, vpcmpeqw,
        vpcmpestri, vpcmpestrm,
        vpcmpgtb, vpcmpgtd, vpcmpgtq, vpcmpgtw,
        vpcmpistri, vpcmpistrm,
        vperm2f128, vperm2i128, vpermd, vpermilpd, vpermilps, vpermpd, vpermps, vpermq,
        vpextrb, vpextrd, vpextrq, vpextrw,
        vpgatherdd, vpgatherdq, vpgatherqd, vpgatherqq,
        vphaddd, vphaddsw, vphaddw, vphminposuw, vphsubd, vphsubsw, vphsubw,
        vpinsrb, vpinsrd, vpinsrq, vpinsrw,
        vpmaddubsw, vpmaddwd,
        vpmaskmovd, vpmaskmovq,
        vpmaxsb, vpmaxsd, vpmaxsw, vpmaxub, vpmaxud, vpmaxuw,
        vpminsb, vpminsd, vpminsw, vpminub, vpminud, vpminuw,
        vpmovmskb,
        vpmovsxbd, vpmovsxbq, vpmovsxbw, vpmovsxdq, vpmovsxwd, vpmovsxwq,
        vpmovzxbd, vpmovzxbq, vpmovzxbw, vpmovzxdq, vpmovzxwd, vpmovzxwq,
        vpmuldq, vpmulhrsw, vpmulhuw, vpmulhw, vpmulld, vpmullw, vpmuludq,
        vpor, vpsadbw,
        vpshufb, vpshufd, vpshufhw, vpshuflw,
        vpsignb, vpsignd, vpsignw,
        vpslld, vpslldq, vpsllq, vpsllvd, vpsllvq, vpsllw,
        vpsrad, vpsravd, vpsraw,
        vpsrld, vpsrldq, vpsrlq, vpsrlvd, vpsrlvq, vpsrlw,
        vpsubb, vpsubd, vpsubq, vpsubsb, vpsubsw, vpsubusb, vpsubusw, vpsubw,
        vptest,
        vpunpckhbw, vpunpckhdq, vpunpckhqdq, vpunpckhwd,
        vpunpcklbw, vpunpckldq, vpunpcklqdq, vpunpcklwd,
        vpxor,
        vrcpps, vrcpss,
        vroundpd, vroundps, vroundsd, vroundss,
        vrsqrtps, vrsqrtss,
        vshufpd, vshufps,
        vsqrtpd, vsqrtps, vsqrtsd, vsqrtss,
        vstmxcsr,
        vsubpd, vsubps, vsubsd, vsubss,
        vtestpd, vtestps,
        vucomisd, vucomiss,
        vunpckhpd, vunpckhps, vunpcklpd, vunpcklps,
        vxorpd, vxorps,
        vzeroall, vzeroupper,

        // 3DNow!
        femms,
    }
}

pub use generated::Mnemonic;

// `in` and `loop` are reserved words, so those two variants carry a trailing
// underscore; everything else that merely *looks* like a keyword (`int`,
// `not`, `or`, `out`, `str`, `syscall`, `xor`) is a plain identifier, since
// Rust only reserves the former. Re-export friendly aliases for the two
// that need them so call sites read the way the AMD manual spells them.
impl Mnemonic {
    pub const IN: Mnemonic = Mnemonic::in_;
    pub const LOOP: Mnemonic = Mnemonic::loop_;
}

#[cfg(test)]
mod tests {
    use super::Mnemonic;

    #[test]
    fn sentinels_display_as_expected() {
        assert_eq!(Mnemonic::NONE.name(), "");
        assert_eq!(Mnemonic::INVALID.name(), "??");
    }

    #[test]
    fn ordinary_mnemonic_displays_lower_case() {
        assert_eq!(Mnemonic::mov.name(), "mov");
        assert_eq!(Mnemonic::vmovsd.name(), "vmovsd");
        assert_eq!(Mnemonic::lea.name(), "lea");
    }

    #[test]
    fn keyword_aliases_resolve() {
        assert_eq!(Mnemonic::IN.name(), "in");
        assert_eq!(Mnemonic::LOOP.name(), "loop");
    }

    #[test]
    fn keyword_lookalikes_need_no_alias() {
        assert_eq!(Mnemonic::not.name(), "not");
        assert_eq!(Mnemonic::xor.name(), "xor");
        assert_eq!(Mnemonic::str.name(), "str");
    }
}
