use dcmkit_dictionary_std::{tags, uids};
use dcmkit_object::{DataSet, VR};
use dcmkit_ul::association::{
    AssociationEvent, AssociationHandle, AssociationState, Error, FnHandler, RequestError,
};
use dcmkit_ul::dimse::{CommandField, Priority};
use dcmkit_ul::pdu::{
    AbortRQServiceProviderReason, AbortRQSource, AssociationRJ, AssociationRJResult,
    AssociationRJServiceProviderASCEReason, AssociationRJSource, AssociationRQ, PDataValue,
    PDataValueType, PresentationContextProposed, UserVariableItem, APPLICATION_CONTEXT_NAME,
};
use dcmkit_ul::{
    read_pdu, write_pdu, ClientAssociationOptions, DimseMessage, DimseStatus, Listener, Pdu,
    ServerAssociationOptions,
};
use matches::assert_matches;
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Answers C-ECHO, and C-STORE of instances with Study ID 1933.
fn storage_scp(association: &AssociationHandle, event: AssociationEvent) {
    if let AssociationEvent::MessageReceived(msg) = event {
        let rsp = match msg.command_field() {
            Some(CommandField::C_ECHO_RQ) => DimseMessage::c_echo_rsp(&msg, DimseStatus::SUCCESS),
            Some(CommandField::C_STORE_RQ) => {
                let study_id = msg.data.as_ref().and_then(|d| d.get_str(tags::STUDY_ID));
                let status = match study_id {
                    Some(id) if id == "1933" => DimseStatus::SUCCESS,
                    _ => DimseStatus(0xC000),
                };
                DimseMessage::c_store_rsp(&msg, status)
            }
            _ => return,
        };
        association.send(rsp).unwrap();
    }
}

/// Accept a single association in the background.
fn spawn_scp(
    options: ServerAssociationOptions<'static>,
) -> Result<(SocketAddr, JoinHandle<dcmkit_ul::association::Result<()>>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let handle = thread::spawn(move || {
        let (stream, _addr) = listener.accept().unwrap();
        let association = options.accept(stream, FnHandler(storage_scp))?;
        association.join();
        Ok(())
    });
    Ok((addr, handle))
}

#[test]
fn rejects_when_no_transfer_syntax_matches() -> Result<()> {
    let scp = ServerAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .with_transfer_syntax(uids::EXPLICIT_VR_BIG_ENDIAN);
    let (addr, scp_handle) = spawn_scp(scp)?;

    let outcome = ClientAssociationOptions::new()
        .with_presentation_context(uids::VERIFICATION, vec![uids::IMPLICIT_VR_LITTLE_ENDIAN])
        .establish(addr, ());

    let expected = AssociationRJ {
        result: AssociationRJResult::Permanent,
        source: AssociationRJSource::ServiceProviderASCE(
            AssociationRJServiceProviderASCEReason::NoReasonGiven,
        ),
    };
    match outcome {
        Err(Error::Rejected { association_rj, .. }) => assert_eq!(association_rj, expected),
        other => panic!("expected rejection, got {:?}", other.map(|a| a.state())),
    }
    assert_matches!(scp_handle.join().unwrap(), Err(Error::Rejected { .. }));
    Ok(())
}

#[test]
fn store_through_listener() -> Result<()> {
    let options = ServerAssociationOptions::new()
        .ae_title("STORE-SCP")
        .with_abstract_syntax(uids::CT_IMAGE_STORAGE)
        .with_abstract_syntax(uids::VERIFICATION);
    let listener = Listener::bind("127.0.0.1:0", options, || FnHandler(storage_scp))?;
    listener.start()?;
    let addr = listener.local_addr()?;

    let association = ClientAssociationOptions::new()
        .called_ae_title("STORE-SCP")
        .with_abstract_syntax(uids::CT_IMAGE_STORAGE)
        .establish(addr, ())?;
    assert_eq!(association.state(), AssociationState::Established);
    let handle = association.handle();
    assert_eq!(handle.peer_ae_title(), "STORE-SCP");

    let sop_instance_uid = "2.25.101210113233201611131823161525181120";
    let mut data = DataSet::new();
    data.put_str(tags::SOP_CLASS_UID, VR::UI, uids::CT_IMAGE_STORAGE);
    data.put_str(tags::SOP_INSTANCE_UID, VR::UI, sop_instance_uid);
    data.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
    data.put_str(tags::STUDY_ID, VR::SH, "1933");
    let rq = DimseMessage::c_store_rq(
        handle.next_message_id(),
        uids::CT_IMAGE_STORAGE,
        sop_instance_uid,
        Priority::Medium,
        data,
    );

    let rsp = handle.request(rq)?.wait_timeout(TIMEOUT)?;
    assert_eq!(rsp.command_field(), Some(CommandField::C_STORE_RSP));
    assert_eq!(rsp.status(), Some(DimseStatus::SUCCESS));
    assert_eq!(rsp.affected_sop_instance_uid().as_deref(), Some(sop_instance_uid));
    assert_eq!(rsp.data, None);

    association.release();
    assert_eq!(association.state(), AssociationState::Closed);

    listener.stop();
    listener.stop();
    assert!(!listener.is_running());
    Ok(())
}

#[test]
fn echo_with_wrong_abstract_syntax_is_refused_locally() -> Result<()> {
    let scp = ServerAssociationOptions::new().with_abstract_syntax(uids::VERIFICATION);
    let (addr, scp_handle) = spawn_scp(scp)?;

    let association = ClientAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .establish(addr, ())?;
    let handle = association.handle();

    let rsp = handle
        .request(DimseMessage::c_echo_rq(handle.next_message_id()))?
        .wait_timeout(TIMEOUT)?;
    assert_eq!(rsp.command_field(), Some(CommandField::C_ECHO_RSP));
    assert!(rsp.status().map(|s| s.is_success()).unwrap_or(false));

    let store = DimseMessage::c_store_rq(
        handle.next_message_id(),
        uids::CT_IMAGE_STORAGE,
        "1.2.3.4",
        Priority::Low,
        DataSet::new(),
    );
    assert_matches!(
        handle.request(store),
        Err(RequestError::NoPresentationContext { .. })
    );

    association.release();
    scp_handle.join().unwrap()?;
    Ok(())
}

#[test]
fn abort_while_awaiting_response_fails_the_request() -> Result<()> {
    let scp = ServerAssociationOptions::new().with_abstract_syntax(uids::VERIFICATION);
    let (addr, scp_handle) = spawn_scp(scp)?;

    let association = ClientAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .establish(
            addr,
            FnHandler::new(|association: &AssociationHandle, event| {
                if let AssociationEvent::MessageSent { .. } = event {
                    association.abort();
                }
            }),
        )?;
    let handle = association.handle();

    let waiter = handle.request(DimseMessage::c_echo_rq(handle.next_message_id()))?;
    assert_matches!(waiter.wait(), Err(RequestError::NetworkError { .. }));
    assert!(handle.wait_closed(Some(TIMEOUT)));
    assert_eq!(handle.state(), AssociationState::Closed);

    // further requests fail right away
    assert_matches!(
        handle.request(DimseMessage::c_echo_rq(handle.next_message_id())),
        Err(RequestError::NetworkError { .. })
    );

    association.join();
    scp_handle.join().unwrap()?;
    Ok(())
}

#[test]
fn dimse_timeout_keeps_the_association_open() -> Result<()> {
    let scp = ServerAssociationOptions::new().with_abstract_syntax(uids::VERIFICATION);
    let (addr, scp_handle) = spawn_scp(scp)?;

    let (tx, rx) = mpsc::channel();
    let association = ClientAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .dimse_timeout(Duration::from_millis(100))
        .establish(
            addr,
            FnHandler::new(move |_association: &AssociationHandle, event| {
                let _ = tx.send(event);
            }),
        )?;

    loop {
        match rx.recv_timeout(TIMEOUT)? {
            AssociationEvent::DimseTimeout => break,
            AssociationEvent::AssociateAccepted => {}
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(association.state(), AssociationState::Established);

    association.release();
    assert_matches!(
        rx.iter().find(|e| *e != AssociationEvent::DimseTimeout),
        Some(AssociationEvent::Released)
    );
    scp_handle.join().unwrap()?;
    Ok(())
}

#[test]
fn data_on_unknown_presentation_context_aborts() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let (tx, rx) = mpsc::channel();
    let scp_handle = thread::spawn(move || {
        let (stream, _addr) = listener.accept().unwrap();
        let association = ServerAssociationOptions::new()
            .with_abstract_syntax(uids::VERIFICATION)
            .accept(
                stream,
                FnHandler::new(move |_association: &AssociationHandle, event| {
                    let _ = tx.send(event);
                }),
            )
            .unwrap();
        association.join();
    });

    let mut socket = TcpStream::connect(addr)?;
    socket.set_read_timeout(Some(TIMEOUT))?;
    let rq = AssociationRQ {
        protocol_version: 1,
        calling_ae_title: "RAW-SCU".into(),
        called_ae_title: "ANY-SCP".into(),
        application_context_name: APPLICATION_CONTEXT_NAME.into(),
        presentation_contexts: vec![PresentationContextProposed {
            id: 1,
            abstract_syntax: uids::VERIFICATION.into(),
            transfer_syntaxes: vec![uids::IMPLICIT_VR_LITTLE_ENDIAN.into()],
        }],
        user_variables: vec![UserVariableItem::MaxLength(16384)],
    };
    write_pdu(&mut socket, &Pdu::AssociationRQ(rq))?;
    assert_matches!(read_pdu(&mut socket, 16384, true)?, Pdu::AssociationAC(_));

    let pdata = Pdu::PData {
        data: vec![PDataValue {
            presentation_context_id: 99,
            value_type: PDataValueType::Command,
            is_last: true,
            data: vec![0; 8],
        }],
    };
    write_pdu(&mut socket, &pdata)?;
    assert_eq!(
        read_pdu(&mut socket, 16384, true)?,
        Pdu::AbortRQ {
            source: AbortRQSource::ServiceProvider(
                AbortRQServiceProviderReason::InvalidPduParameter
            ),
        }
    );

    scp_handle.join().unwrap();
    let events: Vec<_> = rx.iter().collect();
    assert_matches!(
        events.last(),
        Some(AssociationEvent::Aborted { remote: false, .. })
    );
    Ok(())
}

#[test]
fn silent_peer_is_dropped_after_negotiation_timeout() -> Result<()> {
    let options = ServerAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .read_timeout(Duration::from_millis(200));
    let listener = Listener::bind("127.0.0.1:0", options, || FnHandler(storage_scp))?;
    listener.start()?;
    let addr = listener.local_addr()?;

    // connect and never send the association request
    let mut silent = TcpStream::connect(addr)?;
    silent.set_read_timeout(Some(TIMEOUT))?;
    let started = Instant::now();
    let mut buf = [0; 16];
    match silent.read(&mut buf) {
        Ok(n) => assert_eq!(n, 0, "acceptor should close without sending"),
        Err(e) => assert_ne!(e.kind(), std::io::ErrorKind::WouldBlock),
    }
    assert!(started.elapsed() < TIMEOUT);

    // the listener still serves well-behaved peers
    let association = ClientAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .establish(addr, ())?;
    let handle = association.handle();
    let rsp = handle
        .request(DimseMessage::c_echo_rq(handle.next_message_id()))?
        .wait_timeout(TIMEOUT)?;
    assert_eq!(rsp.status(), Some(DimseStatus::SUCCESS));
    association.release();

    listener.stop();
    Ok(())
}

#[test]
fn stopping_an_idle_listener_returns_promptly() -> Result<()> {
    let options = ServerAssociationOptions::new().with_abstract_syntax(uids::VERIFICATION);
    let listener = Listener::bind("127.0.0.1:0", options, || ())?;
    listener.start()?;
    assert!(listener.is_running());
    thread::sleep(Duration::from_millis(100));

    let started = Instant::now();
    listener.stop();
    assert!(started.elapsed() < TIMEOUT);
    assert!(!listener.is_running());

    // restarting picks up connections again
    let addr = listener.local_addr()?;
    listener.start()?;
    let association = ClientAssociationOptions::new()
        .with_abstract_syntax(uids::VERIFICATION)
        .establish(addr, ())?;
    assert_eq!(association.state(), AssociationState::Established);
    association.release();
    listener.stop();
    Ok(())
}
