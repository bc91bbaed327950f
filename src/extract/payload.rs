//! Single-file payload extraction: pcap/pcapng container reading via
//! `pcap-parser` (format auto-detected), Ethernet/IP/transport slicing via
//! `etherparse`. Only packets carrying a non-empty TCP or UDP payload are
//! kept; everything else is skipped without error.

use crate::error::PrepError;
use etherparse::{SlicedPacket, TransportSlice};
use pcap_parser::{create_reader, Linktype, PcapBlockOwned, PcapError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const READER_BUF_SIZE: usize = 65536;

/// Hex-encode the raw transport payload of a captured frame, if it has one.
fn raw_payload(frame: &[u8]) -> Option<String> {
    let sliced = SlicedPacket::from_ethernet(frame).ok()?;
    match sliced.transport {
        Some(TransportSlice::Tcp(_)) | Some(TransportSlice::Udp(_))
            if !sliced.payload.is_empty() =>
        {
            Some(hex::encode(sliced.payload))
        }
        _ => None,
    }
}

/// Read every packet in the capture at `path` and return the ordered
/// hex-encoded payloads of those that carry one.
pub fn extract_file(path: &Path) -> Result<Vec<String>, PrepError> {
    let file = File::open(path)?;
    let mut reader = create_reader(READER_BUF_SIZE, BufReader::new(file)).map_err(|e| {
        PrepError::Capture {
            path: path.to_path_buf(),
            detail: format!("{:?}", e),
        }
    })?;

    let mut payloads = Vec::new();
    // pcapng interfaces declare their own link type; legacy pcap has one global
    let mut if_linktypes: Vec<Linktype> = Vec::new();
    let mut legacy_linktype = Linktype::ETHERNET;

    loop {
        match reader.next() {
            Ok((offset, block)) => {
                match block {
                    PcapBlockOwned::LegacyHeader(hdr) => {
                        legacy_linktype = hdr.network;
                    }
                    PcapBlockOwned::Legacy(pkt) => {
                        if legacy_linktype == Linktype::ETHERNET {
                            let caplen = (pkt.caplen as usize).min(pkt.data.len());
                            if let Some(p) = raw_payload(&pkt.data[..caplen]) {
                                payloads.push(p);
                            }
                        }
                    }
                    PcapBlockOwned::NG(pcap_parser::pcapng::Block::SectionHeader(_)) => {
                        if_linktypes.clear();
                    }
                    PcapBlockOwned::NG(pcap_parser::pcapng::Block::InterfaceDescription(idb)) => {
                        if_linktypes.push(idb.linktype);
                    }
                    PcapBlockOwned::NG(pcap_parser::pcapng::Block::EnhancedPacket(epb)) => {
                        let linktype = if_linktypes
                            .get(epb.if_id as usize)
                            .copied()
                            .unwrap_or(Linktype::ETHERNET);
                        if linktype == Linktype::ETHERNET {
                            let caplen = (epb.caplen as usize).min(epb.data.len());
                            if let Some(p) = raw_payload(&epb.data[..caplen]) {
                                payloads.push(p);
                            }
                        }
                    }
                    PcapBlockOwned::NG(pcap_parser::pcapng::Block::SimplePacket(spb)) => {
                        if if_linktypes.first().copied().unwrap_or(Linktype::ETHERNET)
                            == Linktype::ETHERNET
                        {
                            if let Some(p) = raw_payload(spb.data) {
                                payloads.push(p);
                            }
                        }
                    }
                    PcapBlockOwned::NG(_) => {}
                }
                reader.consume(offset);
            }
            Err(PcapError::Eof) => break,
            Err(PcapError::Incomplete) => {
                reader.refill().map_err(|e| PrepError::Capture {
                    path: path.to_path_buf(),
                    detail: format!("{:?}", e),
                })?;
            }
            Err(e) => {
                return Err(PrepError::Capture {
                    path: path.to_path_buf(),
                    detail: format!("{:?}", e),
                })
            }
        }
    }

    Ok(payloads)
}
